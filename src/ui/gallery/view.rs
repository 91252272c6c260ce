// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: viewport, indicator, thumbnail strip, variant
//! swatches, review grid and the preview overlay on top.

use super::{is_eager_thumbnail, Message, State};
use crate::domain::gallery::{displayable_review_images, MediaEntry, MediaKind, ThumbnailSize};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::overlay;
use crate::ui::picture::{self, Frame, Source};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, mouse_area, scrollable, tooltip, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub thumbnail_size: ThumbnailSize,
    pub show_position_indicator: bool,
    pub lazy_thumbnails: bool,
}

/// Render the gallery with the overlay layered above it when open.
#[must_use]
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let product = state.product();

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(
            Text::new(product.name())
                .size(typography::TITLE_MD)
                .color(ctx.colors.text_primary),
        )
        .push(viewport(state, &ctx));

    if ctx.show_position_indicator && product.media().len() > 1 {
        content = content.push(position_indicator(state, &ctx));
    }

    content = content.push(thumbnail_strip(state, &ctx));

    if !product.variants().is_empty() {
        content = content.push(variant_row(state, &ctx));
    }

    if !product.review_images().is_empty() {
        content = content.push(review_grid(state, &ctx));
    }

    let base: Element<'a, Message> = scrollable(content).height(Length::Fill).into();

    let overlay = overlay::view(
        state.selection().overlay(),
        overlay::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
    );

    match overlay {
        Some(layer) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(layer.map(Message::Overlay))
            .into(),
        None => base,
    }
}

fn media_source<'a>(entry: &'a MediaEntry, i18n: &I18n) -> Source<'a> {
    match entry.kind() {
        MediaKind::Image => picture::image_source(entry.url(), |url| {
            i18n.tr_with_args("gallery-remote-placeholder", &[("url", url)])
        }),
        MediaKind::Embed => Source::Placeholder(
            i18n.tr_with_args("gallery-embed-placeholder", &[("url", entry.url())]),
        ),
    }
}

/// Localized tooltips for the previous and next arrows.
fn arrow_tips(i18n: &I18n) -> (String, String) {
    (i18n.tr("gallery-previous"), i18n.tr("gallery-next"))
}

fn arrow<'a>(
    glyph: &'a str,
    tip: String,
    message: Message,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let arrow_button = button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            colors.overlay_text,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(message);

    let bubble = Container::new(Text::new(tip).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(styles::container::tooltip(
            colors.surface_primary,
            colors.text_primary,
            colors.outline,
        ));

    tooltip(arrow_button, bubble, tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}

fn viewport<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let media = state.product().media();
    let current = state.selection().current_media_index();
    let frame = Frame {
        width: Length::Fill,
        height: Length::Fixed(sizing::VIEWPORT_HEIGHT),
    };

    let content: Element<'a, Message> = match media.get(current) {
        Some(entry) if entry.is_previewable() => {
            mouse_area(picture::view(media_source(entry, ctx.i18n), frame, ctx.colors))
                .on_press(Message::ViewportPressed)
                .into()
        }
        Some(entry) => picture::view(media_source(entry, ctx.i18n), frame, ctx.colors),
        None => picture::placeholder(String::new(), frame, ctx.colors),
    };

    let mut row = Row::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    let centered = Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    if media.len() > 1 {
        let (previous_tip, next_tip) = arrow_tips(ctx.i18n);
        row = row
            .push(arrow("◀", previous_tip, Message::PreviousMedia, ctx.colors))
            .push(centered)
            .push(arrow("▶", next_tip, Message::NextMedia, ctx.colors));
    } else {
        row = row.push(centered);
    }

    row.into()
}

fn position_indicator<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let total = state.product().media().len();
    let current = state.selection().current_media_index();

    let dots = (0..total).fold(Row::new().spacing(spacing::XS), |row, index| {
        row.push(
            button(Text::new(""))
                .width(Length::Fixed(sizing::DOT))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .style(styles::button::dot(
                    index == current,
                    ctx.colors.selection,
                    ctx.colors.outline,
                ))
                .on_press(Message::DotPressed(index)),
        )
    });

    let position = (current + 1).to_string();
    let count = total.to_string();
    let counter = Text::new(ctx.i18n.tr_with_args(
        "gallery-position",
        &[("current", position.as_str()), ("total", count.as_str())],
    ))
    .size(typography::CAPTION)
    .color(ctx.colors.text_secondary);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(dots)
        .push(counter)
        .into()
}

fn thumbnail_strip<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let media = state.product().media();
    let current = state.selection().current_media_index();
    let frame = Frame::square(ctx.thumbnail_size.as_f32());

    let strip = media
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, entry)| {
            let eager = is_eager_thumbnail(index, current, media.len(), ctx.lazy_thumbnails);
            let content = if !eager {
                picture::placeholder(String::new(), frame, ctx.colors)
            } else if entry.kind() == MediaKind::Embed {
                picture::placeholder("▶".to_string(), frame, ctx.colors)
            } else {
                picture::view(media_source(entry, ctx.i18n), frame, ctx.colors)
            };

            row.push(
                button(content)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(
                        index == current,
                        ctx.colors.selection,
                        ctx.colors.outline,
                    ))
                    .on_press(Message::ThumbnailPressed(index)),
            )
        });

    scrollable(strip)
        .direction(Direction::Horizontal(Scrollbar::default()))
        .width(Length::Fill)
        .into()
}

fn section_heading<'a>(label: String, colors: &ColorScheme) -> Text<'a> {
    Text::new(label)
        .size(typography::TITLE_SM)
        .color(colors.text_primary)
}

fn variant_row<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = state.selection().selected_variant_index();
    let frame = Frame::square(ctx.thumbnail_size.as_f32());

    let swatches = state
        .product()
        .variants()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, variant)| {
            let source =
                picture::image_source(variant.image_url(), |_| variant.label().to_string());
            let swatch = Column::new()
                .spacing(spacing::XXS)
                .align_x(Horizontal::Center)
                .push(picture::view(source, frame, ctx.colors))
                .push(
                    Text::new(variant.label())
                        .size(typography::CAPTION)
                        .color(ctx.colors.text_secondary),
                );

            row.push(
                button(swatch)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(
                        selected == Some(index),
                        ctx.colors.selection,
                        ctx.colors.outline,
                    ))
                    .on_press(Message::VariantPressed(index)),
            )
        });

    Column::new()
        .spacing(spacing::XS)
        .push(section_heading(ctx.i18n.tr("gallery-variants-heading"), ctx.colors))
        .push(scrollable(swatches).direction(Direction::Horizontal(Scrollbar::default())))
        .into()
}

fn review_grid<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let all = state.product().review_images();
    let shown = displayable_review_images(all);
    let selected = state.selection().selected_review_image_index();
    let frame = Frame::square(ctx.thumbnail_size.as_f32());

    let grid = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    let mut photos = shown.iter().enumerate().fold(grid, |row, (index, url)| {
        let source = picture::image_source(url, |_| format!("#{}", index + 1));
        row.push(
            button(picture::view(source, frame, ctx.colors))
                .padding(spacing::XXS)
                .style(styles::button::thumbnail(
                    selected == Some(index),
                    ctx.colors.selection,
                    ctx.colors.outline,
                ))
                .on_press(Message::ReviewPhotoPressed(index)),
        )
    });

    let hidden = all.len() - shown.len();
    if hidden > 0 {
        let count = hidden.to_string();
        let more = ctx
            .i18n
            .tr_with_args("gallery-reviews-more", &[("count", count.as_str())]);
        photos = photos.push(
            Text::new(more)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(section_heading(ctx.i18n.tr("gallery-reviews-heading"), ctx.colors))
        .push(scrollable(photos).direction(Direction::Horizontal(Scrollbar::default())))
        .into()
}
