// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

use std::time::Duration;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays on screen before it is retired automatically.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// [`DEFAULT_TOAST_DURATION_MS`] as a `Duration`, for queue construction.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(DEFAULT_TOAST_DURATION_MS);

/// Minimum accepted toast duration override (values below are clamped).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum accepted toast duration override.
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// How long boot-time banner notifications (config warnings and the like)
/// stay visible. Shorter than the regular toast window.
pub const BANNER_DISMISS_MS: u64 = 2000;

// ==========================================================================
// Theming Defaults
// ==========================================================================

/// Interval at which the system color scheme is re-detected while the
/// application runs, mirroring preference change events.
pub const THEME_POLL_INTERVAL_SECS: u64 = 2;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window widths below this are considered a compact viewport.
pub const COMPACT_VIEWPORT_WIDTH: f32 = 600.0;
