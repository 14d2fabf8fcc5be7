// SPDX-License-Identifier: MPL-2.0
//! Localization for the showcase chrome.
//!
//! Toast titles and contents are caller-supplied payloads and are displayed
//! verbatim; only the surrounding page (navbar, demo buttons, headings) is
//! localized.

pub mod fluent;
