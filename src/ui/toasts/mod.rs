// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! A non-intrusive notification component following toast/snackbar UX
//! patterns: toasts queue per screen corner, stack without overlapping,
//! auto-dismiss after a configurable longevity with a visible timer bar, and
//! mirror their layout and animations for RTL locales.
//!
//! # Components
//!
//! - [`notification`] - `ToastConfig`/`ToastStyle` data model and enums
//! - [`store`] - Position-partitioned collection of active toasts
//! - [`lifecycle`] - Per-toast `Entering -> Visible -> Exiting` state machine
//! - [`layout`] - Pure stacking/positioning math and container geometry
//! - [`manager`] - `Manager` with the imperative `show_notification` API
//! - [`widget`] - Toast card and overlay rendering
//! - [`satellite`] - Decorative canvas animations
//!
//! # Usage
//!
//! ```ignore
//! use satellite_toast::ui::toasts::{Manager, Toast, ToastConfig};
//!
//! // Create a manager (container geometry is fixed for its lifetime)
//! let mut manager = Manager::new();
//!
//! // Show a toast
//! manager.show_notification(ToastConfig::new("Saved", "Your changes are safe."));
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&manager, now, window_width).map(Message::Toasts);
//! ```

pub mod layout;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod satellite;
pub mod store;
pub mod widget;

pub use layout::{ContainerConfig, MaxWidth};
pub use lifecycle::Phase;
pub use manager::{Manager, Message as ToastMessage, ShowOutcome};
pub use notification::{Position, TimerAnimation, ToastConfig, ToastId, ToastStyle};
pub use widget::Toast;
