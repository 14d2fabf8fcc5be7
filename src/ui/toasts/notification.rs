// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the caller-facing [`ToastConfig`], the opaque
//! [`ToastStyle`] presentation parameters, and the enums describing where and
//! how a toast is displayed. Styling fields affect rendering only; lifecycle
//! logic never reads them.

use crate::ui::design_tokens::{palette, radius, typography};
use iced::font::Weight;
use iced::{Color, Padding};
use std::time::Duration;

/// Unique identifier for a toast, issued by the manager.
///
/// Callers never construct ids themselves; an id stays reserved for its toast
/// for the toast's entire lifetime, including the exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub(crate) u64);

/// Screen corner a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Index into per-position tables. Stable across the session.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopRight => 1,
            Position::BottomLeft => 2,
            Position::BottomRight => 3,
        }
    }

    /// Whether the group grows downward from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Position::TopLeft | Position::TopRight)
    }

    /// Whether the group is flush with the right screen edge.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Position::TopRight | Position::BottomRight)
    }

    /// The horizontally mirrored corner, used for RTL default placement.
    #[must_use]
    pub fn mirrored(self) -> Position {
        match self {
            Position::TopLeft => Position::TopRight,
            Position::TopRight => Position::TopLeft,
            Position::BottomLeft => Position::BottomRight,
            Position::BottomRight => Position::BottomLeft,
        }
    }
}

/// How the timer bar visualizes the remaining longevity.
///
/// Both styles are pure functions of the elapsed/longevity ratio and have no
/// effect on when the toast is actually dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerAnimation {
    /// Bar contracts symmetrically toward its center from both ends.
    #[default]
    Shrink,
    /// Bar length reduces linearly from one side, like a progress indicator.
    Deplete,
}

/// Default visible duration before auto-dismissal.
pub const DEFAULT_LONGEVITY: Duration = Duration::from_millis(5000);

/// Default enter/exit animation duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(500);

/// Default count of animated background bars inside the toast body.
pub const DEFAULT_BACKGROUND_BARS: u16 = 8;

/// Opaque presentation parameters for one toast.
///
/// The defaults form the stock dark theme. All fields are stored and
/// forwarded to the rendering layer verbatim; in particular `custom_icon`
/// markup is never parsed or validated by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastStyle {
    pub accent_color: Color,
    pub background_color: Color,
    pub title_color: Color,
    pub content_color: Color,
    pub title_size: f32,
    pub title_weight: Weight,
    pub content_size: f32,
    pub content_weight: Weight,
    pub body_border_color: Color,
    pub body_border_width: f32,
    pub body_border_radius: f32,
    pub icon_container_border_color: Color,
    pub icon_container_border_width: f32,
    pub icon_container_border_radius: f32,
    pub icon_color: Color,
    pub close_bg_color: Color,
    pub close_fg_color: Color,
    pub close_hover_bg_color: Color,
    pub close_hover_fg_color: Color,
    pub close_outline_color: Color,
    pub close_outline_width: f32,
    pub close_border_radius: f32,
    pub timer_bg_color: Color,
    pub timer_color: Color,
    pub satellite_color: Color,
    /// Horizontal offset applied to the type-icon container.
    pub icon_x_offset: f32,
    /// Vertical offset applied to the type-icon container.
    pub icon_y_offset: f32,
    /// Body padding used for left-to-right toasts.
    pub padding_ltr: Padding,
    /// Body padding used for right-to-left toasts.
    pub padding_rtl: Padding,
    /// Replacement SVG markup for the default satellite icon, stored opaquely.
    pub custom_icon: Option<String>,
    /// Whether the orbit animation renders above the icon container.
    pub satellite_in_front: bool,
    /// Whether the orbit animation renders at all.
    pub show_satellite_animation: bool,
    /// Disables the animated background bars inside the body.
    pub disable_background_bars: bool,
    /// Number of background bars when enabled.
    pub bars: u16,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            accent_color: palette::TOAST_ACCENT,
            background_color: palette::TOAST_BG,
            title_color: palette::TOAST_TITLE,
            content_color: palette::TOAST_CONTENT,
            title_size: typography::TOAST_TITLE,
            title_weight: Weight::Bold,
            content_size: typography::BODY,
            content_weight: Weight::Normal,
            body_border_color: palette::TOAST_BODY_BORDER,
            body_border_width: 1.0,
            body_border_radius: radius::MD,
            icon_container_border_color: palette::TOAST_ICON_BORDER,
            icon_container_border_width: 1.0,
            icon_container_border_radius: radius::FULL,
            icon_color: palette::TOAST_ACCENT,
            close_bg_color: palette::TOAST_CLOSE_BG,
            close_fg_color: palette::TOAST_CLOSE_FG,
            close_hover_bg_color: palette::TOAST_CLOSE_HOVER_BG,
            close_hover_fg_color: palette::TOAST_CLOSE_HOVER_FG,
            close_outline_color: palette::TOAST_BODY_BORDER,
            close_outline_width: 1.0,
            close_border_radius: radius::FULL,
            timer_bg_color: palette::TOAST_TIMER_BG,
            timer_color: palette::TOAST_TIMER_FILL,
            satellite_color: palette::TOAST_SATELLITE,
            icon_x_offset: 0.0,
            icon_y_offset: 0.0,
            padding_ltr: Padding {
                top: 16.0,
                right: 16.0,
                bottom: 16.0,
                left: 20.0,
            },
            padding_rtl: Padding {
                top: 16.0,
                right: 20.0,
                bottom: 16.0,
                left: 16.0,
            },
            custom_icon: None,
            satellite_in_front: true,
            show_satellite_animation: true,
            disable_background_bars: false,
            bars: DEFAULT_BACKGROUND_BARS,
        }
    }
}

/// Caller-supplied configuration for one toast; everything except `title` and
/// `content` has a default.
///
/// The id is assigned internally when the configuration is handed to the
/// manager, so this type intentionally has no id field.
#[derive(Debug, Clone)]
pub struct ToastConfig {
    pub title: String,
    pub content: String,
    /// Explicit anchor corner. When `None`, the session default applies:
    /// bottom-right for LTR toasts, mirrored to bottom-left for RTL toasts.
    pub position: Option<Position>,
    /// Flips horizontal alignment, slide direction, and default position.
    pub is_rtl: bool,
    /// Visible duration before auto-dismissal. `None` pins the toast until it
    /// is explicitly closed.
    pub longevity: Option<Duration>,
    pub timer_animation: TimerAnimation,
    /// Duration of each of the enter and exit animations.
    pub animation_duration: Duration,
    pub style: ToastStyle,
}

impl ToastConfig {
    /// Creates a configuration with the given title and content and all other
    /// fields at their defaults.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            position: None,
            is_rtl: false,
            longevity: Some(DEFAULT_LONGEVITY),
            timer_animation: TimerAnimation::default(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            style: ToastStyle::default(),
        }
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Sets the visible duration in milliseconds. `0` disables auto-dismiss.
    #[must_use]
    pub fn longevity_ms(mut self, ms: u64) -> Self {
        self.longevity = if ms == 0 {
            None
        } else {
            Some(Duration::from_millis(ms))
        };
        self
    }

    #[must_use]
    pub fn timer_animation(mut self, animation: TimerAnimation) -> Self {
        self.timer_animation = animation;
        self
    }

    #[must_use]
    pub fn animation_duration_ms(mut self, ms: u64) -> Self {
        self.animation_duration = Duration::from_millis(ms);
        self
    }

    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }

    /// The anchor corner after applying the default-position policy: an
    /// explicit `position` wins; otherwise RTL mirrors the bottom-right
    /// session default to bottom-left.
    #[must_use]
    pub fn resolved_position(&self) -> Position {
        match self.position {
            Some(position) => position,
            None if self.is_rtl => Position::default().mirrored(),
            None => Position::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_bottom_right_for_ltr() {
        let config = ToastConfig::new("t", "c");
        assert_eq!(config.resolved_position(), Position::BottomRight);
    }

    #[test]
    fn default_position_mirrors_for_rtl() {
        let config = ToastConfig::new("t", "c").rtl(true);
        assert_eq!(config.resolved_position(), Position::BottomLeft);
    }

    #[test]
    fn explicit_position_wins_over_rtl_mirroring() {
        let config = ToastConfig::new("t", "c").rtl(true).position(Position::TopRight);
        assert_eq!(config.resolved_position(), Position::TopRight);
    }

    #[test]
    fn zero_longevity_disables_auto_dismiss() {
        let config = ToastConfig::new("t", "c").longevity_ms(0);
        assert!(config.longevity.is_none());
    }

    #[test]
    fn default_longevity_is_five_seconds() {
        let config = ToastConfig::new("t", "c");
        assert_eq!(config.longevity, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn mirrored_positions_round_trip() {
        for position in Position::ALL {
            assert_eq!(position.mirrored().mirrored(), position);
            assert_ne!(position.mirrored().is_right(), position.is_right());
            assert_eq!(position.mirrored().is_top(), position.is_top());
        }
    }

    #[test]
    fn custom_icon_markup_is_stored_verbatim() {
        let markup = "<svg><not even valid".to_string();
        let mut style = ToastStyle::default();
        style.custom_icon = Some(markup.clone());
        assert_eq!(style.custom_icon.as_deref(), Some(markup.as_str()));
    }
}
