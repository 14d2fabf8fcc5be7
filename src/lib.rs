// SPDX-License-Identifier: MPL-2.0
//! `satellite_toast` is a toast notification component for the Iced GUI
//! framework, bundled with the showcase application that demonstrates it.
//!
//! Toasts queue per screen corner, stack without overlapping, auto-dismiss
//! with a visible timer bar, and mirror their layout for RTL locales. The
//! core lives in [`ui::toasts`]; the rest of the crate is the showcase.

#![doc(html_root_url = "https://docs.rs/satellite_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
