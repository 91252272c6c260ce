// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A product switcher bar sits above the mounted gallery; any pending notice
//! is shown inside that bar.

use super::config::{self, GalleryConfig};
use super::Message;
use crate::catalog::ProductCatalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub catalog: &'a ProductCatalog,
    pub product_index: usize,
    pub gallery: &'a gallery::State,
    pub gallery_config: &'a GalleryConfig,
    pub notice: Option<&'a str>,
}

/// Renders the switcher bar and the gallery.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = gallery::view(
        ctx.gallery,
        gallery::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            thumbnail_size: ctx.gallery_config.thumbnail_size(),
            show_position_indicator: ctx
                .gallery_config
                .show_position_indicator
                .unwrap_or(config::DEFAULT_SHOW_POSITION_INDICATOR),
            lazy_thumbnails: ctx
                .gallery_config
                .lazy_thumbnails
                .unwrap_or(config::DEFAULT_LAZY_THUMBNAILS),
        },
    )
    .map(Message::Gallery);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if ctx.catalog.len() > 1 || ctx.notice.is_some() {
        column = column.push(switcher_bar(&ctx));
    }

    Container::new(column.push(gallery_view))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn switcher_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center);

    if ctx.catalog.len() > 1 {
        let nav_button = |key: &str, message: Message| {
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::overlay(
                    ctx.colors.overlay_text,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_STRONG,
                ))
                .on_press(message)
        };

        let current = (ctx.product_index + 1).to_string();
        let total = ctx.catalog.len().to_string();
        let counter = ctx.i18n.tr_with_args(
            "catalog-product-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        );

        bar = bar
            .push(nav_button("catalog-previous-product", Message::PreviousProduct))
            .push(
                Text::new(counter)
                    .size(typography::CAPTION)
                    .color(ctx.colors.text_secondary),
            )
            .push(nav_button("catalog-next-product", Message::NextProduct));
    }

    if let Some(notice) = ctx.notice {
        bar = bar.push(
            Text::new(notice.to_string())
                .size(typography::CAPTION)
                .color(ctx.colors.error),
        );
    }

    bar.into()
}
