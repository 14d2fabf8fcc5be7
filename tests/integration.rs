// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios exercised through the public crate surface.

use satellite_toast::config::{self, Config};
use satellite_toast::i18n::fluent::I18n;
use satellite_toast::ui::toasts::{
    ContainerConfig, Manager, MaxWidth, Phase, Position, ShowOutcome, ToastConfig, ToastId,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn show(manager: &mut Manager, now: Instant, config: ToastConfig) -> ToastId {
    match manager.show_at(config, now) {
        ShowOutcome::Shown(id) => id,
        ShowOutcome::Rejected => panic!("show is lenient and never rejects"),
    }
}

#[test]
fn stacking_follows_measured_heights_and_configured_gap() {
    let container = ContainerConfig {
        vertical_gap_adjustment: 56.0,
        ..ContainerConfig::default()
    };
    let mut manager = Manager::with_container(container);
    let now = Instant::now();

    let a = show(&mut manager, now, ToastConfig::new("a", "x"));
    let b = show(&mut manager, now, ToastConfig::new("b", "x"));
    let _c = show(&mut manager, now, ToastConfig::new("c", "x"));

    manager.set_height(a, 90.0);
    manager.set_height(b, 120.0);
    manager.set_height(_c, 75.0);

    let offsets = manager.offsets(Position::BottomRight);
    assert_eq!(offsets, &[0.0, 90.0 + 56.0, 90.0 + 120.0 + 2.0 * 56.0]);
}

#[test]
fn top_anchored_groups_start_at_the_configured_margin() {
    let container = ContainerConfig {
        first_start_margin_adjustment: 32.0,
        ..ContainerConfig::default()
    };
    let mut manager = Manager::with_container(container);
    let now = Instant::now();

    let top = show(
        &mut manager,
        now,
        ToastConfig::new("t", "x").position(Position::TopRight),
    );
    let bottom = show(&mut manager, now, ToastConfig::new("b", "x"));
    manager.set_height(top, 80.0);
    manager.set_height(bottom, 80.0);

    assert_eq!(manager.offsets(Position::TopRight), &[32.0]);
    // The margin compensates for the icon container of top-anchored stacks
    // only; bottom stacks are unaffected.
    assert_eq!(manager.offsets(Position::BottomRight), &[0.0]);
}

#[test]
fn user_close_racing_the_timer_produces_a_single_clean_exit() {
    let mut manager = Manager::new();
    let now = Instant::now();
    let id = show(
        &mut manager,
        now,
        ToastConfig::new("race", "x")
            .longevity_ms(1000)
            .animation_duration_ms(200),
    );

    // Entering completes at 200ms, the timer would fire at 1200ms. The user
    // closes at 1100ms, just before it.
    manager.dismiss_at(id, now + Duration::from_millis(1100));
    assert_eq!(manager.get(id).unwrap().lifecycle().phase(), Phase::Exiting);

    // A second close and the late timer expiry are both absorbed.
    manager.dismiss_at(id, now + Duration::from_millis(1150));
    manager.tick(now + Duration::from_millis(1250));
    assert_eq!(manager.len(), 1, "exit animation still playing");

    manager.tick(now + Duration::from_millis(1400));
    assert!(manager.is_empty());

    // Dismissing the removed id stays a no-op.
    manager.dismiss_at(id, now + Duration::from_millis(1500));
    manager.tick(now + Duration::from_millis(1600));
    assert!(manager.is_empty());
}

#[test]
fn pinned_toast_outlives_every_timer_but_not_the_close_button() {
    let mut manager = Manager::new();
    let now = Instant::now();
    let id = show(&mut manager, now, ToastConfig::new("pin", "x").longevity_ms(0));

    manager.tick(now + Duration::from_secs(86_400));
    assert_eq!(manager.len(), 1);

    manager.dismiss_at(id, now + Duration::from_secs(86_400));
    manager.tick(now + Duration::from_secs(86_401));
    assert!(manager.is_empty());
}

#[test]
fn rtl_toast_lands_in_the_mirrored_default_corner() {
    let mut manager = Manager::new();
    let now = Instant::now();

    show(&mut manager, now, ToastConfig::new("ltr", "x"));
    show(&mut manager, now, ToastConfig::new("rtl", "x").rtl(true));

    assert_eq!(manager.toasts(Position::BottomRight).len(), 1);
    assert_eq!(manager.toasts(Position::BottomLeft).len(), 1);

    // An explicit position is never second-guessed by RTL.
    show(
        &mut manager,
        now,
        ToastConfig::new("rtl-explicit", "x")
            .rtl(true)
            .position(Position::TopRight),
    );
    assert_eq!(manager.toasts(Position::TopRight).len(), 1);
}

#[test]
fn identical_show_sequences_yield_identical_layouts() {
    let run = |now: Instant| {
        let mut manager = Manager::with_container(ContainerConfig::default());
        let a = show(&mut manager, now, ToastConfig::new("a", "x"));
        let b = show(
            &mut manager,
            now,
            ToastConfig::new("b", "x").position(Position::TopLeft),
        );
        manager.set_height(a, 64.0);
        manager.set_height(b, 128.0);
        (
            manager.offsets(Position::BottomRight).to_vec(),
            manager.offsets(Position::TopLeft).to_vec(),
        )
    };

    let now = Instant::now();
    assert_eq!(run(now), run(now));
}

#[test]
fn container_geometry_flows_from_the_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        max_width: Some("100%".to_string()),
        vertical_gap_adjustment: Some(56.0),
        first_start_margin_adjustment: Some(32.0),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let container = loaded.container_config();
    assert_eq!(container.max_width, MaxWidth::Percent(100.0));
    assert_eq!(container.max_width.resolve(1280.0), 1280.0);

    let mut manager = Manager::with_container(container);
    let now = Instant::now();
    let first = show(&mut manager, now, ToastConfig::new("a", "x"));
    show(&mut manager, now, ToastConfig::new("b", "x"));
    manager.set_height(first, 100.0);

    assert_eq!(manager.offsets(Position::BottomRight)[1], 100.0 + 56.0);
}

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.locale().to_string(), "fr");
    assert_eq!(i18n.tr("navbar-language"), "Langue");
}
