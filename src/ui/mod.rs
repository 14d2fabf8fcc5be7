// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`toasts`] - The toast notification core (store, lifecycle, layout,
//!   manager, rendering)
//! - [`navbar`] - Showcase navigation bar with locale selection
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod toasts;
