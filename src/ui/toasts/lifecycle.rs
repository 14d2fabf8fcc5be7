// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle state machine.
//!
//! Every toast traverses `Entering -> Visible -> Exiting` and is removed from
//! the store once the exit animation has run its course. Transitions are
//! driven by [`Lifecycle::tick`], which takes the current instant explicitly
//! so tests can inject time instead of sleeping.
//!
//! There is no per-toast timer handle to cancel: the dismiss deadline is
//! derived from the phase state, so entering `Exiting` supersedes it and a
//! stale expiry can never fire twice.

use super::notification::TimerAnimation;
use std::time::{Duration, Instant};

/// Animation phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Slide-in animation is running.
    Entering,
    /// Fully shown; the dismiss deadline (if any) is counting down.
    Visible,
    /// Slide-out animation is running. Terminal: the only way out is removal.
    Exiting,
}

/// Lifecycle state owned by the store entry of one toast.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    /// When the current phase began.
    phase_started: Instant,
    /// Duration of each of the enter and exit animations.
    animation_duration: Duration,
    /// Visible duration before auto-dismissal; `None` pins the toast.
    longevity: Option<Duration>,
}

impl Lifecycle {
    pub fn new(now: Instant, animation_duration: Duration, longevity: Option<Duration>) -> Self {
        Self {
            phase: Phase::Entering,
            phase_started: now,
            animation_duration,
            longevity,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances the state machine to `now`.
    ///
    /// Returns `true` once the exit animation has completed and the toast
    /// should be removed from the store. Phase transitions are anchored to the
    /// exact end of the previous phase rather than to the tick instant, so a
    /// coarse tick cadence does not accumulate drift. A single call crosses as
    /// many phase boundaries as `now` warrants, but never skips a phase.
    pub fn tick(&mut self, now: Instant) -> bool {
        loop {
            match self.phase {
                Phase::Entering => {
                    let enter_end = self.phase_started + self.animation_duration;
                    if now < enter_end {
                        return false;
                    }
                    self.phase = Phase::Visible;
                    self.phase_started = enter_end;
                }
                Phase::Visible => {
                    let Some(longevity) = self.longevity else {
                        // Pinned toast: stays Visible until an explicit close.
                        return false;
                    };
                    let deadline = self.phase_started + longevity;
                    if now < deadline {
                        return false;
                    }
                    self.phase = Phase::Exiting;
                    self.phase_started = deadline;
                }
                Phase::Exiting => {
                    return now >= self.phase_started + self.animation_duration;
                }
            }
        }
    }

    /// Requests the exit transition, collapsing concurrent triggers (deadline
    /// expiry, close button, programmatic dismissal) into a single transition.
    ///
    /// A toast still `Entering` short-circuits directly to `Exiting`; a toast
    /// already `Exiting` is left untouched.
    pub fn dismiss(&mut self, now: Instant) {
        if self.phase != Phase::Exiting {
            self.phase = Phase::Exiting;
            self.phase_started = now;
        }
    }

    /// Slide progress in `[0, 1]`: `0` is fully off, `1` is fully settled.
    /// Ramps up while entering and back down while exiting.
    #[must_use]
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let ratio = self.phase_ratio(now, self.animation_duration);
        match self.phase {
            Phase::Entering => ease_out_cubic(ratio),
            Phase::Visible => 1.0,
            Phase::Exiting => 1.0 - ease_out_cubic(ratio),
        }
    }

    /// Fraction of longevity remaining, in `[0, 1]`.
    ///
    /// `1.0` while entering or when the toast is pinned; frozen at `0.0` once
    /// the exit phase begins.
    #[must_use]
    pub fn timer_fraction(&self, now: Instant) -> f32 {
        let Some(longevity) = self.longevity else {
            return 1.0;
        };
        match self.phase {
            Phase::Entering => 1.0,
            Phase::Visible => 1.0 - self.phase_ratio(now, longevity),
            Phase::Exiting => 0.0,
        }
    }

    fn phase_ratio(&self, now: Instant, duration: Duration) -> f32 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.phase_started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Cubic ease-out curve used for the slide animations.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Timer-bar geometry as `(start, width)` fractions of the full bar width.
///
/// `Shrink` keeps the bar centered while both ends contract symmetrically;
/// `Deplete` anchors the bar at its reading-direction origin (left for LTR,
/// right for RTL) and reduces it linearly. Pure presentation; dismissal
/// timing is unaffected.
#[must_use]
pub fn timer_bar_span(fraction: f32, animation: TimerAnimation, is_rtl: bool) -> (f32, f32) {
    let fraction = fraction.clamp(0.0, 1.0);
    match animation {
        TimerAnimation::Shrink => ((1.0 - fraction) / 2.0, fraction),
        TimerAnimation::Deplete if is_rtl => (1.0 - fraction, fraction),
        TimerAnimation::Deplete => (0.0, fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIM: Duration = Duration::from_millis(500);

    fn lifecycle(longevity_ms: u64) -> (Lifecycle, Instant) {
        let start = Instant::now();
        let longevity = (longevity_ms > 0).then(|| Duration::from_millis(longevity_ms));
        (Lifecycle::new(start, ANIM, longevity), start)
    }

    #[test]
    fn phases_are_traversed_in_order() {
        let (mut life, start) = lifecycle(5000);
        assert_eq!(life.phase(), Phase::Entering);

        assert!(!life.tick(start + Duration::from_millis(499)));
        assert_eq!(life.phase(), Phase::Entering);

        assert!(!life.tick(start + Duration::from_millis(500)));
        assert_eq!(life.phase(), Phase::Visible);

        // Longevity counts from the end of the enter animation.
        assert!(!life.tick(start + Duration::from_millis(5499)));
        assert_eq!(life.phase(), Phase::Visible);

        assert!(!life.tick(start + Duration::from_millis(5500)));
        assert_eq!(life.phase(), Phase::Exiting);

        assert!(life.tick(start + Duration::from_millis(6000)));
    }

    #[test]
    fn single_late_tick_crosses_phases_without_skipping_exit() {
        let (mut life, start) = lifecycle(100);
        // Far past everything in one tick: still reports removal through the
        // ordered transitions, not a panic or a stuck state.
        assert!(life.tick(start + Duration::from_secs(60)));
        assert_eq!(life.phase(), Phase::Exiting);
    }

    #[test]
    fn pinned_toast_never_leaves_visible_on_its_own() {
        let (mut life, start) = lifecycle(0);
        assert!(!life.tick(start + Duration::from_secs(3600)));
        assert_eq!(life.phase(), Phase::Visible);

        life.dismiss(start + Duration::from_secs(3600));
        assert_eq!(life.phase(), Phase::Exiting);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let (mut life, start) = lifecycle(5000);
        life.tick(start + ANIM);

        let first = start + Duration::from_millis(1000);
        life.dismiss(first);
        let exit_end = first + ANIM;

        // Second trigger (e.g. the deadline racing the close click) must not
        // restart the exit animation.
        life.dismiss(first + Duration::from_millis(400));
        assert!(!life.tick(exit_end - Duration::from_millis(1)));
        assert!(life.tick(exit_end));
    }

    #[test]
    fn dismiss_while_entering_short_circuits_to_exiting() {
        let (mut life, start) = lifecycle(5000);
        life.dismiss(start + Duration::from_millis(100));
        assert_eq!(life.phase(), Phase::Exiting);
        assert!(life.tick(start + Duration::from_millis(100) + ANIM));
    }

    #[test]
    fn slide_progress_ramps_up_then_down() {
        let (mut life, start) = lifecycle(5000);
        assert_eq!(life.slide_progress(start), 0.0);
        let mid_enter = life.slide_progress(start + Duration::from_millis(250));
        assert!(mid_enter > 0.0 && mid_enter < 1.0);

        life.tick(start + ANIM);
        assert_eq!(life.slide_progress(start + ANIM), 1.0);

        life.dismiss(start + Duration::from_secs(1));
        let mid_exit = life.slide_progress(start + Duration::from_millis(1250));
        assert!(mid_exit > 0.0 && mid_exit < 1.0);
        assert_eq!(life.slide_progress(start + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn timer_fraction_depletes_only_while_visible() {
        let (mut life, start) = lifecycle(1000);
        assert_eq!(life.timer_fraction(start + Duration::from_millis(250)), 1.0);

        life.tick(start + ANIM);
        let halfway = life.timer_fraction(start + ANIM + Duration::from_millis(500));
        assert!((halfway - 0.5).abs() < 1e-3);

        life.dismiss(start + ANIM + Duration::from_millis(500));
        assert_eq!(life.timer_fraction(start + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn pinned_timer_fraction_stays_full() {
        let (mut life, start) = lifecycle(0);
        life.tick(start + ANIM);
        assert_eq!(life.timer_fraction(start + Duration::from_secs(600)), 1.0);
    }

    #[test]
    fn ease_out_cubic_is_monotonic_and_clamped() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let mut last = 0.0;
        for i in 1..=10 {
            let value = ease_out_cubic(i as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn shrink_span_stays_centered() {
        let (start, width) = timer_bar_span(0.5, TimerAnimation::Shrink, false);
        assert!((start - 0.25).abs() < 1e-6);
        assert!((width - 0.5).abs() < 1e-6);
        // Center of the bar never moves.
        assert!((start + width / 2.0 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn deplete_span_anchors_at_reading_origin() {
        let (start_ltr, width_ltr) = timer_bar_span(0.25, TimerAnimation::Deplete, false);
        assert_eq!(start_ltr, 0.0);
        assert!((width_ltr - 0.25).abs() < 1e-6);

        let (start_rtl, width_rtl) = timer_bar_span(0.25, TimerAnimation::Deplete, true);
        assert!((start_rtl - 0.75).abs() < 1e-6);
        assert!((width_rtl - 0.25).abs() < 1e-6);
    }
}
