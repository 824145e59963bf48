// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod theming;
