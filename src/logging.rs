// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging setup.
//!
//! Output goes to stderr through `tracing-subscriber`. The filter comes from
//! `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is absent or invalid.
pub const DEFAULT_FILTER: &str = "storefront_gallery=info";

/// Installs the global subscriber. A second call is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
