// SPDX-License-Identifier: MPL-2.0
//! Position-partitioned collection of active toasts.
//!
//! Each screen corner owns an ordered group (insertion order, oldest first).
//! The store issues ids, tracks measured heights, and marks the affected
//! group dirty on every mutation so that layout recomputation stays bounded
//! to the group that actually changed.

use super::lifecycle::Lifecycle;
use super::notification::{Position, ToastConfig, ToastId};
use crate::ui::design_tokens::sizing;
use std::time::Instant;

/// One live toast: caller configuration plus the state the manager owns.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    id: ToastId,
    config: ToastConfig,
    /// Anchor corner after default/RTL resolution; fixed for the toast's life.
    position: Position,
    lifecycle: Lifecycle,
    /// When the toast was shown; drives the decorative animations.
    shown_at: Instant,
    /// Rendered height as reported by the rendering layer; estimated until a
    /// measurement arrives.
    height: f32,
}

impl ActiveToast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub(crate) fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Age of the toast at `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> std::time::Duration {
        now.saturating_duration_since(self.shown_at)
    }
}

/// The toast store: four ordered position groups plus the id counter.
#[derive(Debug, Default)]
pub struct Store {
    groups: [Vec<ActiveToast>; 4],
    /// Monotonic id source. Per-manager, so rebuilding a manager with the
    /// same configuration replays identically.
    next_id: u64,
    /// Groups whose membership or heights changed since the last layout pass.
    dirty: [bool; 4],
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast to its resolved position group and returns the fresh
    /// id. O(1) amortized; never blocks.
    pub fn add(&mut self, config: ToastConfig, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let position = config.resolved_position();
        let lifecycle = Lifecycle::new(now, config.animation_duration, config.longevity);
        self.groups[position.index()].push(ActiveToast {
            id,
            config,
            position,
            lifecycle,
            shown_at: now,
            height: sizing::TOAST_ESTIMATED_HEIGHT,
        });
        self.dirty[position.index()] = true;
        id
    }

    /// Removes the toast if it is still present.
    ///
    /// Unknown or already-removed ids are a silent no-op, never an error:
    /// dismissal races (timer expiry vs. close click) must not crash the
    /// manager.
    pub fn remove(&mut self, id: ToastId) {
        for (index, group) in self.groups.iter_mut().enumerate() {
            if let Some(pos) = group.iter().position(|toast| toast.id == id) {
                group.remove(pos);
                self.dirty[index] = true;
                return;
            }
        }
    }

    /// Live ordered view of one position group (oldest first).
    #[must_use]
    pub fn list(&self, position: Position) -> &[ActiveToast] {
        &self.groups[position.index()]
    }

    pub(crate) fn list_mut(&mut self, position: Position) -> &mut Vec<ActiveToast> {
        &mut self.groups[position.index()]
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ActiveToast> {
        self.groups.iter().flatten().find(|toast| toast.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ToastId) -> Option<&mut ActiveToast> {
        self.groups
            .iter_mut()
            .flatten()
            .find(|toast| toast.id == id)
    }

    /// Records a rendered height reported by the rendering layer. Marks the
    /// group dirty only when the measurement actually changed.
    pub fn set_height(&mut self, id: ToastId, height: f32) {
        if let Some(toast) = self.get_mut(id) {
            if (toast.height - height).abs() > f32::EPSILON {
                let index = toast.position.index();
                toast.height = height;
                self.dirty[index] = true;
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Drains the dirty flags, yielding the positions needing a layout pass.
    pub(crate) fn take_dirty(&mut self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |position| {
            let index = position.index();
            std::mem::take(&mut self.dirty[index])
        })
    }
}
