// SPDX-License-Identifier: MPL-2.0
//! Product gallery selection state and its transition rules.
//!
//! [`controller`] holds the pure rules; [`store`] binds them to whatever
//! container the host keeps state in.

pub mod controller;
pub mod store;

pub use controller::{
    advance_media, close_overlay, open_overlay_with_media, open_overlay_with_review_image, reduce,
    select_media_index, select_variant, Direction, GalleryAction, GalleryData, GallerySelection,
    OverlayState,
};
pub use store::{GallerySession, LocalSelection, SelectionStore};
