// SPDX-License-Identifier: MPL-2.0
//! Product gallery domain types.

pub mod newtypes;
pub mod types;

pub use newtypes::ThumbnailSize;
pub use types::{
    displayable_review_images, MediaEntry, MediaKind, VariantEntry, REVIEW_IMAGE_DISPLAY_LIMIT,
};
