// SPDX-License-Identifier: MPL-2.0
//! Product catalog loading.
//!
//! A catalog is a TOML file listing the products the gallery can display:
//!
//! ```toml
//! [[product]]
//! name = "Trail Runner"
//! media = [
//!     { kind = "image", url = "trail/front.jpg" },
//!     { kind = "embed", url = "https://video.example/embed/trail" },
//! ]
//! variants = [{ image_url = "trail/red.jpg", label = "Red" }]
//! review_images = ["reviews/1.jpg", "reviews/2.jpg"]
//! ```
//!
//! Relative local URLs are resolved against the catalog's directory so the
//! file can travel with its images.

use crate::domain::gallery::{MediaEntry, MediaKind, VariantEntry};
use crate::error::{Error, Result};
use crate::gallery::GalleryData;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One product as presented by the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    media: Vec<MediaEntry>,
    variants: Vec<VariantEntry>,
    review_images: Vec<String>,
}

impl Product {
    /// Builds a product, rejecting an empty media list.
    pub fn new(
        name: impl Into<String>,
        media: Vec<MediaEntry>,
        variants: Vec<VariantEntry>,
        review_images: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if media.is_empty() {
            return Err(Error::Catalog(format!(
                "product '{name}' has no media entries"
            )));
        }
        Ok(Self {
            name,
            media,
            variants,
            review_images,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn media(&self) -> &[MediaEntry] {
        &self.media
    }

    #[must_use]
    pub fn variants(&self) -> &[VariantEntry] {
        &self.variants
    }

    #[must_use]
    pub fn review_images(&self) -> &[String] {
        &self.review_images
    }

    /// Borrowed view of the entry lists for the gallery controller.
    #[must_use]
    pub fn gallery_data(&self) -> GalleryData<'_> {
        GalleryData {
            media: &self.media,
            variants: &self.variants,
            review_images: &self.review_images,
        }
    }
}

/// Ordered list of products loaded from a catalog file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds a catalog, rejecting an empty product list.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(Error::Catalog("catalog contains no products".to_string()));
        }
        Ok(Self { products })
    }

    /// First product; a catalog is never empty.
    #[must_use]
    pub fn first(&self) -> &Product {
        &self.products[0]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// File Format
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "product")]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    #[serde(default)]
    media: Vec<MediaRecord>,
    #[serde(default)]
    variants: Vec<VariantRecord>,
    #[serde(default)]
    review_images: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MediaKindRecord {
    Image,
    Embed,
}

#[derive(Debug, Deserialize)]
struct MediaRecord {
    kind: MediaKindRecord,
    url: String,
}

#[derive(Debug, Deserialize)]
struct VariantRecord {
    image_url: String,
    label: String,
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads a catalog from a TOML file.
pub fn load_from_path(path: &Path) -> Result<ProductCatalog> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content, path.parent())
}

/// Parses a catalog, resolving relative local URLs against `base_dir`.
pub fn from_toml_str(content: &str, base_dir: Option<&Path>) -> Result<ProductCatalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
    let resolve = |url: String| resolve_url(url, base_dir);

    let products = file
        .products
        .into_iter()
        .map(|record| {
            let media = record
                .media
                .into_iter()
                .map(|m| {
                    let kind = match m.kind {
                        MediaKindRecord::Image => MediaKind::Image,
                        MediaKindRecord::Embed => MediaKind::Embed,
                    };
                    let url = match kind {
                        MediaKind::Image => resolve(m.url),
                        MediaKind::Embed => m.url,
                    };
                    MediaEntry::new(kind, url)
                })
                .collect();
            let variants = record
                .variants
                .into_iter()
                .map(|v| VariantEntry::new(resolve(v.image_url), v.label))
                .collect();
            let review_images = record.review_images.into_iter().map(resolve).collect();
            Product::new(record.name, media, variants, review_images)
        })
        .collect::<Result<Vec<_>>>()?;

    ProductCatalog::new(products)
}

/// Returns true for URLs the gallery cannot read from disk.
#[must_use]
pub fn is_remote_url(url: &str) -> bool {
    url.contains("://")
}

fn resolve_url(url: String, base_dir: Option<&Path>) -> String {
    match base_dir {
        Some(base) if !is_remote_url(&url) && Path::new(&url).is_relative() => {
            base.join(&url).to_string_lossy().into_owned()
        }
        _ => url,
    }
}
