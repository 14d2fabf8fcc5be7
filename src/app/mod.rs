// SPDX-License-Identifier: MPL-2.0
//! Application root state for the showcase.
//!
//! The `App` struct wires the demo catalogue, localization, and the toast
//! manager together and keeps the main update loop in one place so the
//! user-facing behavior is easy to audit.

mod demos;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::toasts::{ContainerConfig, Manager};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 680.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state bridging the demo page, localization, and the
/// toast manager.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Geometry from the config file, restored when a demo override expires.
    default_container: ContainerConfig,
    manager: Manager,
    window_size: Size,
    /// Timestamp of the last processed tick; the view renders animation state
    /// as of this instant.
    last_tick: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            default_container: ContainerConfig::default(),
            manager: Manager::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            last_tick: Instant::now(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let default_container = config.container_config();

        let app = App {
            i18n,
            config,
            default_container,
            manager: Manager::with_container(default_container),
            ..Self::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(&self.manager),
            subscription::create_event_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Toasts(toast_message) => {
                self.manager.handle_message(&toast_message);
                Task::none()
            }
            Message::ShowDemo(index) => update::handle_show_demo(self, index),
            Message::Tick(now) => update::handle_tick(self, now),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::{Position, ToastMessage};
    use std::time::Duration;

    #[test]
    fn default_app_starts_with_empty_manager() {
        let app = App::default();
        assert!(app.manager.is_empty());
    }

    #[test]
    fn window_title_comes_from_translations() {
        let app = App::default();
        assert_eq!(app.title(), "SatelliteToast Showcase");
    }

    #[test]
    fn window_resize_updates_tracked_size() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 720.0)));
        assert_eq!(app.window_size.width, 1280.0);
    }

    #[test]
    fn dismiss_message_routes_to_the_manager() {
        let mut app = App::default();
        let _ = app.update(Message::ShowDemo(0));
        let id = app
            .manager
            .toasts(Position::BottomRight)
            .first()
            .map(|toast| toast.id())
            .expect("demo toast was shown");

        let _ = app.update(Message::Toasts(ToastMessage::Dismiss(id)));
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(app.manager.is_empty());
    }
}
