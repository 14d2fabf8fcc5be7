// SPDX-License-Identifier: MPL-2.0
//! Stacking and positioning math for position groups.
//!
//! The layout engine is pure: it is handed the ordered heights of a position
//! group (measured by the rendering layer, estimated until then) plus the
//! container configuration, and produces the vertical offset of every toast
//! from its anchor edge. Keeping heights as injected inputs means the whole
//! module is unit-testable without a rendering environment.

use super::notification::Position;
use crate::ui::design_tokens::{sizing, spacing};

/// Maximum toast width. Fixed and percentage values are both accepted and
/// carried through verbatim to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxWidth {
    /// Fixed width in logical pixels.
    Px(f32),
    /// Percentage of the viewport width, `0.0..=100.0`.
    Percent(f32),
}

impl Default for MaxWidth {
    fn default() -> Self {
        MaxWidth::Px(sizing::TOAST_MAX_WIDTH)
    }
}

impl MaxWidth {
    /// Resolves the clamp against a concrete viewport width.
    #[must_use]
    pub fn resolve(self, viewport_width: f32) -> f32 {
        match self {
            MaxWidth::Px(px) => px.min(viewport_width),
            MaxWidth::Percent(pct) => viewport_width * (pct.clamp(0.0, 100.0) / 100.0),
        }
    }
}

/// Per-manager container geometry, applied uniformly to all position groups.
///
/// Set once at construction; reconfiguration happens by rebuilding the manager
/// (the remount-to-reconfigure policy), never through individual
/// `show_notification` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerConfig {
    pub max_width: MaxWidth,
    /// Inset from the anchored horizontal screen edge.
    pub horizontal_margin_adjustment: f32,
    /// Vertical gap between stacked toasts within a group.
    pub vertical_gap_adjustment: f32,
    /// Extra start margin applied to top-anchored groups, compensating for the
    /// type-icon container that overhangs the toast body and is otherwise
    /// unaccounted for in spacing math. Reproduced verbatim from the original
    /// component for visual parity.
    pub first_start_margin_adjustment: f32,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            max_width: MaxWidth::default(),
            horizontal_margin_adjustment: spacing::MD,
            vertical_gap_adjustment: spacing::SM,
            first_start_margin_adjustment: 0.0,
        }
    }
}

/// Which screen edge a toast is flush with, after RTL resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Right,
}

/// Where the slide animation originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    FromLeft,
    FromRight,
}

/// Edge the group is flush with: derived from the position alone. RTL does not
/// move an explicitly placed toast, it only mirrors defaults and animations.
#[must_use]
pub fn horizontal_anchor(position: Position) -> HorizontalAnchor {
    if position.is_right() {
        HorizontalAnchor::Right
    } else {
        HorizontalAnchor::Left
    }
}

/// Slide-in origin: from the anchored edge, reversed for RTL toasts.
#[must_use]
pub fn slide_direction(position: Position, is_rtl: bool) -> SlideDirection {
    let from_right = position.is_right() != is_rtl;
    if from_right {
        SlideDirection::FromRight
    } else {
        SlideDirection::FromLeft
    }
}

/// Computes the vertical offset of each toast from the group's anchor edge.
///
/// `offset(i)` is the cumulative sum of the heights and gaps of every toast
/// inserted before `i` (oldest first, newest stacking away from the corner),
/// plus the first-start margin for top-anchored groups. Deterministic and
/// idempotent: identical inputs always yield identical offsets, so the
/// frequent recomputation triggered by entering and exiting toasts cannot
/// drift.
#[must_use]
pub fn compute_offsets(heights: &[f32], config: &ContainerConfig, position: Position) -> Vec<f32> {
    let start = if position.is_top() {
        config.first_start_margin_adjustment
    } else {
        0.0
    };

    let mut offsets = Vec::with_capacity(heights.len());
    let mut cursor = start;
    for &height in heights {
        offsets.push(cursor);
        cursor += height + config.vertical_gap_adjustment;
    }
    offsets
}

/// Horizontal inset from the anchored edge at a given slide progress.
///
/// At `progress == 1.0` the toast rests at the configured margin. Toasts
/// sliding in from their anchored edge start flush with the screen border;
/// reversed (RTL) slides start displaced inward and settle outward to the
/// same resting margin.
#[must_use]
pub fn slide_inset(
    progress: f32,
    margin: f32,
    anchor: HorizontalAnchor,
    direction: SlideDirection,
) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    let from_anchor_side = matches!(
        (anchor, direction),
        (HorizontalAnchor::Right, SlideDirection::FromRight)
            | (HorizontalAnchor::Left, SlideDirection::FromLeft)
    );
    if from_anchor_side {
        margin * progress
    } else {
        margin + SLIDE_TRAVEL * (1.0 - progress)
    }
}

/// Travel distance for reversed slides, in logical pixels.
const SLIDE_TRAVEL: f32 = 24.0;
