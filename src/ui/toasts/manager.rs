// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management and the imperative public API.
//!
//! The `Manager` owns the store, drives every toast's lifecycle from tick
//! messages, and keeps a per-position offset table current. All state
//! transitions happen inside `update`-driven message handling, one at a time,
//! matching the single-threaded cooperative model of the Iced event loop. If
//! the manager is ever hosted behind threads, it must stay behind a single
//! owning task so that no two layout passes for one group run concurrently.

use super::layout::{self, ContainerConfig};
use super::notification::{Position, ToastConfig, ToastId};
use super::store::{ActiveToast, Store};
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by id (close button or programmatic).
    Dismiss(ToastId),
    /// Periodic tick driving timers and animation phases.
    Tick(Instant),
    /// Rendered height reported by the rendering layer.
    HeightMeasured(ToastId, f32),
}

/// Internal result of a show request.
///
/// The public surface returns nothing, but the internal outcome is explicit
/// so the validation policy stays testable. The chosen policy is lenient:
/// missing or empty `title`/`content` render as empty strings rather than
/// rejecting the call, so under normal use every request is `Shown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    Shown(ToastId),
    Rejected,
}

/// Manages active toasts: store, lifecycle, and layout offsets.
#[derive(Debug, Default)]
pub struct Manager {
    store: Store,
    container: ContainerConfig,
    /// Cached vertical offsets per position group, recomputed synchronously
    /// on every mutation of the affected group.
    offsets: [Vec<f32>; 4],
}

impl Manager {
    /// Creates a manager with default container geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with the given container geometry.
    ///
    /// Geometry is fixed for the manager's lifetime; to reconfigure, build a
    /// fresh manager (the remount-to-reconfigure policy).
    #[must_use]
    pub fn with_container(container: ContainerConfig) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn container(&self) -> &ContainerConfig {
        &self.container
    }

    /// Shows a toast. The single imperative entry point of the public API.
    pub fn show_notification(&mut self, config: ToastConfig) {
        let _ = self.show_at(config, Instant::now());
    }

    /// Shows a toast at an explicit instant, returning the internal outcome.
    pub fn show_at(&mut self, config: ToastConfig, now: Instant) -> ShowOutcome {
        // Lenient policy: empty title/content are stored as-is and render as
        // empty strings. Callers have no failure channel, so nothing rejects.
        let id = self.store.add(config, now);
        self.relayout();
        ShowOutcome::Shown(id)
    }

    /// Requests dismissal of a toast. Idempotent; unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.dismiss_at(id, Instant::now());
    }

    pub fn dismiss_at(&mut self, id: ToastId, now: Instant) {
        if let Some(toast) = self.store.get_mut(id) {
            toast.lifecycle_mut().dismiss(now);
        }
    }

    /// Advances every toast's lifecycle to `now`, removing toasts whose exit
    /// animation has completed, then refreshes offsets for affected groups.
    ///
    /// Removal only ever happens here, never synchronously with dismissal, so
    /// the exit animation is never clipped.
    pub fn tick(&mut self, now: Instant) {
        let mut removed: Vec<ToastId> = Vec::new();
        for position in Position::ALL {
            for toast in self.store.list_mut(position).iter_mut() {
                if toast.lifecycle_mut().tick(now) {
                    removed.push(toast.id());
                }
            }
        }
        for id in removed {
            self.store.remove(id);
        }
        self.relayout();
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id),
            Message::Tick(now) => self.tick(*now),
            Message::HeightMeasured(id, height) => self.set_height(*id, *height),
        }
    }

    /// Records a rendered height for a toast.
    pub fn set_height(&mut self, id: ToastId, height: f32) {
        self.store.set_height(id, height);
        self.relayout();
    }

    /// Ordered toasts of one position group (oldest first).
    #[must_use]
    pub fn toasts(&self, position: Position) -> &[ActiveToast] {
        self.store.list(position)
    }

    /// Vertical offsets matching [`Manager::toasts`] index-for-index.
    #[must_use]
    pub fn offsets(&self, position: Position) -> &[f32] {
        &self.offsets[position.index()]
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ActiveToast> {
        self.store.get(id)
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Recomputes offsets for the groups the store marked dirty. Bounded to
    /// the affected groups; untouched groups keep their cached table.
    fn relayout(&mut self) {
        let container = self.container;
        let dirty: Vec<Position> = self.store.take_dirty().collect();
        for position in dirty {
            let heights: Vec<f32> = self
                .store
                .list(position)
                .iter()
                .map(ActiveToast::height)
                .collect();
            self.offsets[position.index()] =
                layout::compute_offsets(&heights, &container, position);
        }
    }
}
