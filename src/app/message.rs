// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::ProductCatalog;
use crate::ui::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(gallery::Message),
    PreviousProduct,
    NextProduct,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Catalog loaded before the window opens.
    pub catalog: ProductCatalog,
}
