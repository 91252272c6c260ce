// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog and the
//! mounted product gallery.
//!
//! The `App` struct wires together localization, persisted preferences and
//! the gallery component, and translates top-level messages into product
//! switches or gallery updates.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Product, ProductCatalog};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::{ColorScheme, ThemeMode};
use config::GalleryConfig;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: ProductCatalog,
    product_index: usize,
    gallery: gallery::State,
    gallery_config: GalleryConfig,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    /// Translated message shown under the product switcher, if any.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("product_index", &self.product_index)
            .field("product", &self.gallery.product().name())
            .field("selection", self.gallery.selection())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and mounts the first product of the catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::from_parts(flags.catalog, i18n, config);
        if let Some(key) = config_warning {
            app.notice = Some(app.i18n.tr(&key));
        }

        tracing::info!(
            products = app.catalog.len(),
            locale = %app.i18n.current_locale(),
            "gallery ready"
        );

        (app, Task::none())
    }

    fn from_parts(catalog: ProductCatalog, i18n: I18n, config: config::Config) -> Self {
        let first = catalog.first().clone();
        Self {
            i18n,
            catalog,
            product_index: 0,
            gallery: gallery::State::new(first),
            gallery_config: config.gallery,
            theme_mode: config.general.theme_mode,
            colors: config.general.theme_mode.color_scheme(),
            notice: None,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.gallery.product().name())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_keyboard_subscription(self.keyboard_navigation())
    }

    fn keyboard_navigation(&self) -> bool {
        self.gallery_config
            .keyboard_navigation
            .unwrap_or(config::DEFAULT_KEYBOARD_NAVIGATION)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            product_index: &mut self.product_index,
            gallery: &mut self.gallery,
            notice: &mut self.notice,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            catalog: &self.catalog,
            product_index: self.product_index,
            gallery: &self.gallery,
            gallery_config: &self.gallery_config,
            notice: self.notice.as_deref(),
        })
    }

    /// Product currently mounted in the gallery.
    #[must_use]
    pub fn current_product(&self) -> &Product {
        self.gallery.product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::MediaEntry;

    fn catalog() -> ProductCatalog {
        let products = ["Boot", "Tote", "Scarf"]
            .iter()
            .map(|name| {
                Product::new(
                    *name,
                    vec![
                        MediaEntry::image(format!("{name}-1.jpg")),
                        MediaEntry::image(format!("{name}-2.jpg")),
                    ],
                    vec![],
                    vec![],
                )
                .expect("valid product")
            })
            .collect();
        ProductCatalog::new(products).expect("non-empty catalog")
    }

    fn app() -> App {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().expect("valid locale"));
        App::from_parts(catalog(), i18n, config::Config::default())
    }

    #[test]
    fn starts_on_first_product() {
        let app = app();
        assert_eq!(app.current_product().name(), "Boot");
        assert_eq!(app.gallery.selection().current_media_index(), 0);
    }

    #[test]
    fn next_product_wraps_and_resets_selection() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::NextMedia));
        assert_eq!(app.gallery.selection().current_media_index(), 1);

        let _ = app.update(Message::NextProduct);
        assert_eq!(app.current_product().name(), "Tote");
        assert_eq!(app.gallery.selection().current_media_index(), 0);

        let _ = app.update(Message::NextProduct);
        let _ = app.update(Message::NextProduct);
        assert_eq!(app.current_product().name(), "Boot");
    }

    #[test]
    fn previous_product_wraps_to_last() {
        let mut app = app();
        let _ = app.update(Message::PreviousProduct);
        assert_eq!(app.current_product().name(), "Scarf");
    }

    #[test]
    fn rejected_selection_sets_notice() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(9)));
        assert_eq!(
            app.notice.as_deref(),
            Some("That media item is no longer available.")
        );

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(1)));
        assert!(app.notice.is_none());
    }

    #[test]
    fn keyboard_navigation_follows_config() {
        assert!(app().keyboard_navigation());

        let mut settings = config::Config::default();
        settings.gallery.keyboard_navigation = Some(false);
        let app = App::from_parts(catalog(), I18n::default(), settings);
        assert!(!app.keyboard_navigation());
    }

    #[test]
    fn title_includes_product_name() {
        let app = app();
        assert_eq!(app.title(), "Boot - Storefront Gallery");
    }
}
