// SPDX-License-Identifier: MPL-2.0
//! Core gallery entry types for the domain layer.
//!
//! These are immutable value records. No entry owns another; the gallery
//! controller only ever reads them and replaces index values.

/// Number of review photos that are ever displayed or selectable.
pub const REVIEW_IMAGE_DISPLAY_LIMIT: usize = 8;

/// Kind of an entry in the primary media viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image. Can be shown in the preview overlay.
    Image,
    /// Embedded external video widget. Never previewable in the overlay.
    Embed,
}

/// One item of the primary product viewport.
///
/// # Example
///
/// ```
/// use storefront_gallery::domain::gallery::{MediaEntry, MediaKind};
///
/// let entry = MediaEntry::image("shoes/front.jpg");
/// assert_eq!(entry.kind(), MediaKind::Image);
/// assert!(entry.is_previewable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    kind: MediaKind,
    url: String,
}

impl MediaEntry {
    #[must_use]
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(MediaKind::Image, url)
    }

    #[must_use]
    pub fn embed(url: impl Into<String>) -> Self {
        Self::new(MediaKind::Embed, url)
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns true if this entry may be opened in the preview overlay.
    #[must_use]
    pub fn is_previewable(&self) -> bool {
        self.kind == MediaKind::Image
    }
}

/// A product option (color, style...) represented by its own thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEntry {
    image_url: String,
    label: String,
}

impl VariantEntry {
    #[must_use]
    pub fn new(image_url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Returns the prefix of `review_images` that is eligible for display.
#[must_use]
pub fn displayable_review_images(review_images: &[String]) -> &[String] {
    let end = review_images.len().min(REVIEW_IMAGE_DISPLAY_LIMIT);
    &review_images[..end]
}
