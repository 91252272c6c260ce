// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette::BLACK, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Frame around a selectable thumbnail, swatch or review photo.
///
/// The selected item gets a thicker border in `selection`; the others a thin
/// `outline` that turns to `selection` on hover.
pub fn thumbnail(
    selected: bool,
    selection: Color,
    outline: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (color, width) = match (selected, status) {
            (true, _) => (selection, border::WIDTH_MD),
            (false, button::Status::Hovered) => (selection, border::WIDTH_SM),
            (false, _) => (outline, border::WIDTH_SM),
        };

        button::Style {
            background: None,
            text_color: Color::TRANSPARENT,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Round indicator dot under the viewport.
pub fn dot(
    active: bool,
    selection: Color,
    outline: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => selection,
            (false, _) => outline,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: Color::TRANSPARENT,
            border: Border {
                color: fill,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Style for overlay buttons (navigation arrows, preview close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OPAQUE,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
