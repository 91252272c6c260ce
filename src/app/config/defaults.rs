// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Thumbnail sizing and presentation toggles

use crate::domain::gallery::newtypes::thumbnail_bounds;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default thumbnail edge in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u16 = thumbnail_bounds::DEFAULT;

/// Minimum thumbnail edge in logical pixels.
pub const MIN_THUMBNAIL_SIZE: u16 = thumbnail_bounds::MIN;

/// Maximum thumbnail edge in logical pixels.
pub const MAX_THUMBNAIL_SIZE: u16 = thumbnail_bounds::MAX;

/// Whether the indicator dots under the viewport are shown by default.
pub const DEFAULT_SHOW_POSITION_INDICATOR: bool = true;

/// Whether arrow keys and Escape drive the gallery by default.
pub const DEFAULT_KEYBOARD_NAVIGATION: bool = true;

/// Whether off-screen thumbnails are rendered as placeholders by default.
pub const DEFAULT_LAZY_THUMBNAILS: bool = true;
