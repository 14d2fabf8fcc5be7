// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the showcase update loop.

use super::demos::DEMOS;
use super::{App, Message};
use crate::config;
use crate::ui::navbar;
use crate::ui::toasts::{Manager, ToastConfig};
use iced::Task;
use std::time::Instant;

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::LocaleChanged(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.language = Some(locale.to_string());
            if config::save(&app.config).is_err() {
                app.manager.show_notification(ToastConfig::new(
                    app.i18n.tr("notification-save-error-title"),
                    app.i18n.tr("notification-save-error-content"),
                ));
            }
            Task::none()
        }
    }
}

pub fn handle_show_demo(app: &mut App, index: usize) -> Task<Message> {
    let Some(demo) = DEMOS.get(index) else {
        return Task::none();
    };

    // Container geometry is fixed per manager, so a demo that wants different
    // geometry gets a fresh manager. Only swap while the screen is clear so
    // live toasts keep the layout they were shown with.
    let wanted = demo.container.unwrap_or(app.default_container);
    if app.manager.is_empty() && *app.manager.container() != wanted {
        app.manager = Manager::with_container(wanted);
    }

    app.manager.show_notification((demo.build)());
    Task::none()
}

pub fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.last_tick = now;
    app.manager.tick(now);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::{MaxWidth, Position};
    use std::time::Duration;

    #[test]
    fn show_demo_adds_a_toast() {
        let mut app = App::default();
        let _ = handle_show_demo(&mut app, 0);
        assert_eq!(app.manager.len(), 1);
    }

    #[test]
    fn unknown_demo_index_is_ignored() {
        let mut app = App::default();
        let _ = handle_show_demo(&mut app, usize::MAX);
        assert!(app.manager.is_empty());
    }

    #[test]
    fn placement_demo_remounts_manager_with_its_geometry() {
        let mut app = App::default();
        let index = DEMOS
            .iter()
            .position(|demo| demo.key == "placement")
            .expect("placement demo exists");

        let _ = handle_show_demo(&mut app, index);
        assert_eq!(app.manager.container().max_width, MaxWidth::Percent(100.0));
        assert_eq!(app.manager.toasts(Position::TopRight).len(), 1);
    }

    #[test]
    fn geometry_does_not_change_while_toasts_are_live() {
        let mut app = App::default();
        let placement = DEMOS
            .iter()
            .position(|demo| demo.key == "placement")
            .expect("placement demo exists");

        let _ = handle_show_demo(&mut app, 0);
        let before = *app.manager.container();
        let _ = handle_show_demo(&mut app, placement);

        assert_eq!(*app.manager.container(), before);
        assert_eq!(app.manager.len(), 2);
    }

    #[test]
    fn geometry_reverts_to_default_after_screen_clears() {
        let mut app = App::default();
        let placement = DEMOS
            .iter()
            .position(|demo| demo.key == "placement")
            .expect("placement demo exists");

        let _ = handle_show_demo(&mut app, placement);
        let _ = handle_tick(&mut app, Instant::now() + Duration::from_secs(60));
        assert!(app.manager.is_empty());

        let _ = handle_show_demo(&mut app, 0);
        assert_eq!(*app.manager.container(), app.default_container);
    }

    #[test]
    fn tick_advances_the_manager_clock() {
        let mut app = App::default();
        let _ = handle_show_demo(&mut app, 0);

        let later = Instant::now() + Duration::from_secs(60);
        let _ = handle_tick(&mut app, later);

        assert!(app.manager.is_empty());
        assert_eq!(app.last_tick, later);
    }
}
