// SPDX-License-Identifier: MPL-2.0
//! User interface: design tokens, theming, shared styles and the gallery
//! components.

pub mod design_tokens;
pub mod gallery;
pub mod overlay;
pub mod picture;
pub mod styles;
pub mod theming;
