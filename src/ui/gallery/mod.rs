// SPDX-License-Identifier: MPL-2.0
//! Product gallery component.
//!
//! Owns the mounted [`GallerySession`] and translates view messages into
//! gallery actions. The selection rules themselves live in
//! [`crate::gallery::controller`]; this component only decides which action
//! a press maps to and reports the outcome to the parent.

mod view;

pub use view::{view, ViewContext};

use crate::catalog::Product;
use crate::error::SelectionError;
use crate::gallery::{Direction, GalleryAction, GallerySelection, GallerySession};
use crate::ui::overlay;

/// Thumbnails further than this from the current media (wrapping) are
/// drawn as placeholders when lazy thumbnails are enabled.
pub const LAZY_THUMBNAIL_RADIUS: usize = 2;

/// Messages for the gallery component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousMedia,
    NextMedia,
    ThumbnailPressed(usize),
    DotPressed(usize),
    /// Press on the current image in the primary viewport.
    ViewportPressed,
    VariantPressed(usize),
    ReviewPhotoPressed(usize),
    Overlay(overlay::Message),
    /// Keyboard dismiss (Escape).
    DismissRequested,
}

/// Effects produced by gallery updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SelectionChanged,
    SelectionRejected(SelectionError),
}

/// Gallery component state.
#[derive(Debug, Clone)]
pub struct State {
    session: GallerySession,
}

impl State {
    /// Mounts `product` with the initial selection.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            session: GallerySession::new(product),
        }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        self.session.product()
    }

    #[must_use]
    pub fn selection(&self) -> &GallerySelection {
        self.session.selection()
    }

    /// Remounts the gallery on another product with a fresh selection.
    pub fn switch_product(&mut self, product: Product) {
        self.session.switch_product(product);
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        let Some(action) = action_for(message) else {
            return Effect::None;
        };

        let before = self.session.selection().clone();
        match self.session.dispatch(action) {
            Ok(after) if *after == before => {
                tracing::debug!(?action, "gallery action left selection unchanged");
                Effect::None
            }
            Ok(_) => Effect::SelectionChanged,
            Err(err) => {
                tracing::warn!(%err, ?action, "gallery selection rejected");
                Effect::SelectionRejected(err)
            }
        }
    }
}

/// Maps a view message to the gallery action it triggers.
fn action_for(message: Message) -> Option<GalleryAction> {
    match message {
        Message::PreviousMedia => Some(GalleryAction::Advance(Direction::Previous)),
        Message::NextMedia => Some(GalleryAction::Advance(Direction::Next)),
        Message::ThumbnailPressed(index) | Message::DotPressed(index) => {
            Some(GalleryAction::SelectMedia(index))
        }
        Message::ViewportPressed => Some(GalleryAction::PreviewCurrentMedia),
        Message::VariantPressed(index) => Some(GalleryAction::SelectVariant(index)),
        Message::ReviewPhotoPressed(index) => Some(GalleryAction::PreviewReviewImage(index)),
        Message::Overlay(msg) => match overlay::update(msg) {
            overlay::Event::Dismiss => Some(GalleryAction::CloseOverlay),
            overlay::Event::None => None,
        },
        Message::DismissRequested => Some(GalleryAction::CloseOverlay),
    }
}

/// Returns true if the thumbnail at `index` should load its image.
///
/// Only a rendering hint; it never feeds back into selection indices.
#[must_use]
pub fn is_eager_thumbnail(index: usize, current: usize, len: usize, lazy: bool) -> bool {
    if !lazy || len == 0 {
        return true;
    }
    let forward = (index % len + len - current % len) % len;
    let distance = forward.min(len - forward);
    distance <= LAZY_THUMBNAIL_RADIUS
}
