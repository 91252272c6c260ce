// SPDX-License-Identifier: MPL-2.0
//! `storefront_gallery` is a product media gallery built with the Iced GUI
//! framework.
//!
//! The gallery rules (media carousel, variant swatches, review photos and the
//! preview overlay) live in [`gallery`] as pure transitions over a
//! [`gallery::GallerySelection`], so they can be driven and tested without a
//! window. The [`ui`] and [`app`] modules render that state and feed user
//! input back into it.

#![doc(html_root_url = "https://docs.rs/storefront_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;

pub use app::config;
