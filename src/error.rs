// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
}

/// Which index space a selection request addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    /// Primary media viewport (thumbnails, indicator dots).
    Media,
    /// Variant swatch row.
    Variant,
    /// Review photo grid (only the displayable prefix).
    ReviewImage,
}

impl fmt::Display for SelectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionTarget::Media => write!(f, "media"),
            SelectionTarget::Variant => write!(f, "variant"),
            SelectionTarget::ReviewImage => write!(f, "review image"),
        }
    }
}

/// Caller-contract violations reported by the gallery controller.
///
/// The controller never clamps or wraps a direct selection, so a bad index
/// always comes back to the caller as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// `index` is not in `0..bound` for the currently provided data.
    IndexOutOfRange {
        target: SelectionTarget,
        index: usize,
        bound: usize,
    },
}

impl SelectionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SelectionError::IndexOutOfRange {
                target: SelectionTarget::Media,
                ..
            } => "error-selection-media-out-of-range",
            SelectionError::IndexOutOfRange {
                target: SelectionTarget::Variant,
                ..
            } => "error-selection-variant-out-of-range",
            SelectionError::IndexOutOfRange {
                target: SelectionTarget::ReviewImage,
                ..
            } => "error-selection-review-out-of-range",
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::IndexOutOfRange {
                target,
                index,
                bound,
            } => write!(
                f,
                "{} index {} out of range (valid: 0..{})",
                target, index, bound
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
