// SPDX-License-Identifier: MPL-2.0
//! Rendering of gallery URLs.
//!
//! Local paths are drawn with Iced's image widget. Remote URLs are never
//! fetched, so they and embed entries are drawn as labelled placeholders.

use crate::catalog::is_remote_url;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{Container, Text};
use iced::{ContentFit, Element, Length};

/// How a URL should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// Local image file.
    Local(&'a str),
    /// Placeholder carrying the caption to show.
    Placeholder(String),
}

/// Sizing for a rendered picture.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: Length,
    pub height: Length,
}

impl Frame {
    #[must_use]
    pub fn square(edge: f32) -> Self {
        Self {
            width: Length::Fixed(edge),
            height: Length::Fixed(edge),
        }
    }
}

/// Picks the source for an image URL; `caption` labels the placeholder.
#[must_use]
pub fn image_source(url: &str, caption: impl FnOnce(&str) -> String) -> Source<'_> {
    if is_remote_url(url) {
        Source::Placeholder(caption(url))
    } else {
        Source::Local(url)
    }
}

/// Draws `source` inside `frame`.
pub fn view<'a, Message: 'a>(
    source: Source<'a>,
    frame: Frame,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    match source {
        Source::Local(path) => Image::new(Handle::from_path(path))
            .width(frame.width)
            .height(frame.height)
            .content_fit(ContentFit::Contain)
            .into(),
        Source::Placeholder(caption) => placeholder(caption, frame, colors),
    }
}

/// Neutral box with an optional caption.
pub fn placeholder<'a, Message: 'a>(
    caption: String,
    frame: Frame,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    Container::new(
        Text::new(caption)
            .size(typography::CAPTION)
            .color(colors.text_secondary),
    )
    .padding(spacing::XXS)
    .center_x(frame.width)
    .center_y(frame.height)
    .style(styles::container::placeholder(
        colors.surface_secondary,
        colors.outline,
    ))
    .into()
}
