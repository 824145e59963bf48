// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::session::{PublicSettings, SiteInfo, UserPublic};
use crate::ui::notifications;
use crate::ui::notifications::Severity;
use crate::ui::theming::ThemeMode;
use iced::Size;

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Toast duration override in milliseconds (`--toast-ms`).
    pub toast_ms: Option<u64>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Notification queue events (expiry timers, dismiss buttons).
    Notification(notifications::Message),
    /// Demo button: push a toast of the given severity.
    DemoToast(Severity),
    /// Demo button: push a simulated API fault through the adapter.
    DemoFault { with_detail: bool },
    /// Session data resolved (imitates the startup API round-trip).
    SessionResolved {
        site: SiteInfo,
        user: UserPublic,
        settings: PublicSettings,
    },
    /// The user picked a theme mode in the header.
    ThemeModeSelected(ThemeMode),
    /// Periodic re-detection of the system color scheme.
    SystemThemePoll,
    /// The window was resized; reclassify the viewport.
    WindowResized(Size),
}
