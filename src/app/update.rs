// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::catalog::ProductCatalog;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, Effect as GalleryEffect};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a ProductCatalog,
    pub product_index: &'a mut usize,
    pub gallery: &'a mut gallery::State,
    pub notice: &'a mut Option<String>,
}

/// Routes a top-level message to its handler.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => handle_gallery_message(ctx, msg),
        Message::PreviousProduct => step_product(ctx, false),
        Message::NextProduct => step_product(ctx, true),
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match ctx.gallery.handle(message) {
        GalleryEffect::None => {}
        GalleryEffect::SelectionChanged => *ctx.notice = None,
        GalleryEffect::SelectionRejected(err) => {
            *ctx.notice = Some(ctx.i18n.tr(err.i18n_key()));
        }
    }
    Task::none()
}

/// Moves to the neighbouring product, wrapping at either end.
fn step_product(ctx: &mut UpdateContext<'_>, forward: bool) -> Task<Message> {
    let len = ctx.catalog.len();
    let next = if forward {
        (*ctx.product_index + 1) % len
    } else {
        (*ctx.product_index + len - 1) % len
    };

    let Some(product) = ctx.catalog.get(next) else {
        return Task::none();
    };

    *ctx.product_index = next;
    *ctx.notice = None;
    ctx.gallery.switch_product(product.clone());
    Task::none()
}
