// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for gallery presentation values, ensuring they are
//! always within valid ranges.

/// Thumbnail size bounds in logical pixels.
pub mod thumbnail_bounds {
    /// Minimum thumbnail edge.
    pub const MIN: u16 = 48;
    /// Maximum thumbnail edge.
    pub const MAX: u16 = 160;
    /// Default thumbnail edge.
    pub const DEFAULT: u16 = 72;
}

/// Edge length of thumbnails in the strip, swatch row and review grid.
///
/// # Example
///
/// ```
/// use storefront_gallery::domain::gallery::ThumbnailSize;
///
/// assert_eq!(ThumbnailSize::new(96).value(), 96);
///
/// // Values outside range are clamped
/// assert_eq!(ThumbnailSize::new(1000).value(), 160);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSize(u16);

impl ThumbnailSize {
    /// Creates a new thumbnail size, clamping to the valid range.
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.clamp(thumbnail_bounds::MIN, thumbnail_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the size as a float for layout code.
    #[must_use]
    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for ThumbnailSize {
    fn default() -> Self {
        Self(thumbnail_bounds::DEFAULT)
    }
}
