// SPDX-License-Identifier: MPL-2.0
//! Full-screen preview overlay.
//!
//! Stateless: it renders whatever [`OverlayState`] it is given and turns
//! pointer presses into at most one [`Event::Dismiss`]. Presses on the
//! backdrop or the close button dismiss; a press on the image itself is
//! swallowed so it never reaches the backdrop.

use crate::gallery::OverlayState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::picture::{self, Frame};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{Element, Length};

/// Where a press inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Backdrop,
    Image,
    CloseButton,
}

/// Messages emitted by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed(Target),
}

/// Events propagated to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Dismiss,
}

/// Process an overlay message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Pressed(Target::Backdrop | Target::CloseButton) => Event::Dismiss,
        Message::Pressed(Target::Image) => Event::None,
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Render the overlay, or `None` while it is closed.
#[must_use]
pub fn view<'a>(state: &'a OverlayState, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let image_url = state.image_url()?;

    let source = picture::image_source(image_url, |url| {
        ctx.i18n
            .tr_with_args("gallery-remote-placeholder", &[("url", url)])
    });
    let image = picture::view(
        source,
        Frame {
            width: Length::Shrink,
            height: Length::Fill,
        },
        ctx.colors,
    );
    // Handling the press here captures it before the backdrop sees it.
    let image = mouse_area(image).on_press(Message::Pressed(Target::Image));

    let close_label = Text::new(ctx.i18n.tr("gallery-close-preview")).size(typography::BODY);
    let close_button = button(close_label)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            ctx.colors.overlay_text,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(Message::Pressed(Target::CloseButton));

    let top_bar = Row::new()
        .width(Length::Fill)
        .push(
            Container::new(close_button)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .spacing(spacing::MD)
        .push(top_bar)
        .push(
            Container::new(image)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.colors.overlay_backdrop));

    Some(
        mouse_area(backdrop)
            .on_press(Message::Pressed(Target::Backdrop))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_press_dismisses() {
        assert_eq!(update(Message::Pressed(Target::Backdrop)), Event::Dismiss);
    }

    #[test]
    fn close_button_dismisses() {
        assert_eq!(
            update(Message::Pressed(Target::CloseButton)),
            Event::Dismiss
        );
    }

    #[test]
    fn image_press_is_not_a_dismiss() {
        assert_eq!(update(Message::Pressed(Target::Image)), Event::None);
    }

    #[test]
    fn closed_overlay_renders_nothing() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let rendered = view(
            &OverlayState::Closed,
            ViewContext {
                i18n: &i18n,
                colors: &colors,
            },
        );
        assert!(rendered.is_none());
    }

    #[test]
    fn open_overlay_renders() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let state = OverlayState::Open {
            image_url: "https://cdn.example/review.jpg".to_string(),
        };
        let rendered = view(
            &state,
            ViewContext {
                i18n: &i18n,
                colors: &colors,
            },
        );
        assert!(rendered.is_some());
    }
}
