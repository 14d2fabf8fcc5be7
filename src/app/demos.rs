// SPDX-License-Identifier: MPL-2.0
//! The demo catalogue shown on the showcase page.
//!
//! Each demo is a localized name/description pair plus a configuration
//! builder, and optionally a container geometry override. Geometry overrides
//! take effect by rebuilding the manager, so they only apply while no toasts
//! are on screen.

use crate::ui::toasts::{
    ContainerConfig, MaxWidth, Position, TimerAnimation, ToastConfig, ToastStyle,
};
use iced::font::Weight;
use iced::{Color, Padding};

/// One entry of the showcase catalogue.
pub struct Demo {
    /// Base of the Fluent keys: `demo-<key>-name` and `demo-<key>-description`.
    pub key: &'static str,
    /// Container geometry this demo wants, if different from the default.
    pub container: Option<ContainerConfig>,
    pub build: fn() -> ToastConfig,
}

pub static DEMOS: &[Demo] = &[
    Demo {
        key: "default",
        container: None,
        build: default_toast,
    },
    Demo {
        key: "placement",
        container: Some(ContainerConfig {
            max_width: MaxWidth::Percent(100.0),
            horizontal_margin_adjustment: 15.0,
            vertical_gap_adjustment: 56.0,
            first_start_margin_adjustment: 32.0,
        }),
        build: placement,
    },
    Demo {
        key: "rtl",
        container: None,
        build: rtl,
    },
    Demo {
        key: "timer",
        container: None,
        build: timer,
    },
    Demo {
        key: "longevity",
        container: None,
        build: longevity,
    },
    Demo {
        key: "colors",
        container: None,
        build: colors,
    },
    Demo {
        key: "typography",
        container: None,
        build: typography,
    },
    Demo {
        key: "custom-icon",
        container: None,
        build: custom_icon,
    },
    Demo {
        key: "satellite-layer",
        container: None,
        build: satellite_layer,
    },
    Demo {
        key: "background-bars",
        container: None,
        build: background_bars,
    },
    Demo {
        key: "customization",
        container: None,
        build: customization,
    },
];

fn default_toast() -> ToastConfig {
    ToastConfig::new("SatelliteToast", "Hello! I am a toast notification.")
}

fn placement() -> ToastConfig {
    ToastConfig::new("Top Right", "Stacked from the top, full-width container.")
        .position(Position::TopRight)
}

fn rtl() -> ToastConfig {
    ToastConfig::new("שלום!", "אני הודעת טוסט בעברית.").rtl(true)
}

fn timer() -> ToastConfig {
    ToastConfig::new("Deplete", "The timer bar drains from one side.")
        .timer_animation(TimerAnimation::Deplete)
}

fn longevity() -> ToastConfig {
    ToastConfig::new("Patience", "This toast stays for fifteen seconds.").longevity_ms(15_000)
}

fn colors() -> ToastConfig {
    let style = ToastStyle {
        accent_color: Color::from_rgb8(0x00, 0xa6, 0xfb),
        background_color: Color::from_rgb8(0x03, 0x1d, 0x44),
        title_color: Color::from_rgb8(0xdc, 0xf2, 0xff),
        content_color: Color::from_rgb8(0x9c, 0xc7, 0xe8),
        body_border_color: Color::from_rgb8(0x00, 0x6d, 0xaa),
        icon_container_border_color: Color::from_rgb8(0x00, 0x6d, 0xaa),
        icon_color: Color::from_rgb8(0x00, 0xa6, 0xfb),
        close_bg_color: Color::from_rgb8(0x04, 0x2c, 0x66),
        close_fg_color: Color::from_rgb8(0xdc, 0xf2, 0xff),
        close_hover_bg_color: Color::from_rgb8(0x00, 0xa6, 0xfb),
        close_hover_fg_color: Color::from_rgb8(0x03, 0x1d, 0x44),
        close_outline_color: Color::from_rgb8(0x00, 0x6d, 0xaa),
        timer_bg_color: Color::from_rgb8(0x04, 0x2c, 0x66),
        timer_color: Color::from_rgb8(0x00, 0xa6, 0xfb),
        satellite_color: Color::from_rgb8(0x00, 0x6d, 0xaa),
        ..ToastStyle::default()
    };
    ToastConfig::new("Ocean", "Every color of the toast is configurable.").style(style)
}

fn typography() -> ToastConfig {
    let style = ToastStyle {
        title_size: 20.0,
        title_weight: Weight::ExtraBold,
        content_size: 13.0,
        content_weight: Weight::Light,
        body_border_radius: 0.0,
        body_border_width: 3.0,
        icon_container_border_radius: 4.0,
        icon_container_border_width: 2.0,
        close_border_radius: 0.0,
        close_outline_width: 2.0,
        ..ToastStyle::default()
    };
    ToastConfig::new("Sharp Corners", "Square shapes, heavy title, thin content.").style(style)
}

const CAMPFIRE_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" "#,
    r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M12 2c2.5 3 5 5.2 5 8.5a5 5 0 0 1-10 0C7 7.2 9.5 5 12 2z"/>"#,
    r#"<path d="M4 22l16-5"/><path d="M20 22L4 17"/></svg>"#
);

fn custom_icon() -> ToastConfig {
    let style = ToastStyle {
        custom_icon: Some(CAMPFIRE_SVG.to_string()),
        ..ToastStyle::default()
    };
    ToastConfig::new("Campfire", "A custom SVG replaces the satellite icon.").style(style)
}

fn satellite_layer() -> ToastConfig {
    let style = ToastStyle {
        satellite_in_front: false,
        ..ToastStyle::default()
    };
    ToastConfig::new("Behind", "The satellite orbits behind the icon container.").style(style)
}

fn background_bars() -> ToastConfig {
    let style = ToastStyle {
        disable_background_bars: true,
        ..ToastStyle::default()
    };
    ToastConfig::new("Minimal", "No animated bars behind the body.").style(style)
}

fn customization() -> ToastConfig {
    let style = ToastStyle {
        show_satellite_animation: false,
        bars: 100,
        icon_x_offset: 6.0,
        icon_y_offset: 4.0,
        padding_ltr: Padding {
            top: 24.0,
            right: 12.0,
            bottom: 24.0,
            left: 28.0,
        },
        padding_rtl: Padding {
            top: 24.0,
            right: 28.0,
            bottom: 24.0,
            left: 12.0,
        },
        ..ToastStyle::default()
    };
    ToastConfig::new("Fine Tuning", "Offsets, paddings, bar count, slower slide.")
        .animation_duration_ms(720)
        .style(style)
}
