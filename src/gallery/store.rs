// SPDX-License-Identifier: MPL-2.0
//! Host-side storage binding for the gallery selection.
//!
//! The controller defines the rules; a [`SelectionStore`] is whatever
//! container the host keeps the current [`GallerySelection`] in. A
//! [`GallerySession`] pairs one product with a store and routes every
//! action through [`reduce`](super::reduce), so there is a single entry point
//! for both the iced component and non-UI callers.

use super::controller::{reduce, GalleryAction, GallerySelection};
use crate::catalog::Product;
use crate::error::SelectionError;

/// A state container with get/set access to the gallery selection.
pub trait SelectionStore {
    fn get(&self) -> &GallerySelection;
    fn set(&mut self, selection: GallerySelection);
}

/// Plain in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSelection {
    selection: GallerySelection,
}

impl SelectionStore for LocalSelection {
    fn get(&self) -> &GallerySelection {
        &self.selection
    }

    fn set(&mut self, selection: GallerySelection) {
        self.selection = selection;
    }
}

/// The mounted gallery for one product.
#[derive(Debug, Clone)]
pub struct GallerySession<S = LocalSelection> {
    product: Product,
    store: S,
}

impl GallerySession<LocalSelection> {
    /// Mounts `product` with a fresh selection.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self::with_store(product, LocalSelection::default())
    }
}

impl<S: SelectionStore> GallerySession<S> {
    /// Mounts `product` on a host-provided store, resetting whatever the
    /// store held before.
    pub fn with_store(product: Product, mut store: S) -> Self {
        store.set(GallerySelection::new());
        Self { product, store }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn selection(&self) -> &GallerySelection {
        self.store.get()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies `action`. On error the stored selection is left untouched.
    pub fn dispatch(&mut self, action: GalleryAction) -> Result<&GallerySelection, SelectionError> {
        let next = reduce(self.store.get(), self.product.gallery_data(), action)?;
        if &next != self.store.get() {
            tracing::debug!(
                ?action,
                media_index = next.current_media_index(),
                overlay_open = next.overlay().is_open(),
                "gallery selection changed"
            );
        }
        self.store.set(next);
        Ok(self.store.get())
    }

    /// Replaces the product and resets all four selections.
    ///
    /// Indices from the previous product are never carried over since they
    /// may point past the end of the new product's lists.
    pub fn switch_product(&mut self, product: Product) {
        tracing::info!(product = product.name(), "switching gallery product");
        self.product = product;
        self.store.set(GallerySelection::new());
    }
}
