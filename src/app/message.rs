// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the showcase.

use crate::ui::navbar;
use crate::ui::toasts;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Toasts(toasts::ToastMessage),
    /// Spawn the toast of the demo at this catalogue index.
    ShowDemo(usize),
    /// Periodic tick driving toast timers and animations.
    Tick(Instant),
    /// Window size change, tracked for percentage-based toast widths.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
