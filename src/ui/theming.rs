// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.
//!
//! The system branch mirrors the operating system color scheme as reported
//! by the `dark-light` crate. Detection is a point-in-time read; callers
//! that want to follow preference changes re-detect on a periodic
//! subscription tick.

use dark_light;
use iced::Theme;
use serde::{Deserialize, Serialize};

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Returns whether this mode currently resolves to a dark scheme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark(),
        }
    }

    /// Resolves the mode to an Iced theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        };
        f.write_str(label)
    }
}

/// Reads the operating system color-scheme preference.
///
/// Dark only when the system explicitly reports dark; an unspecified
/// preference or a detection error resolves to light.
#[must_use]
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_system_preference() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn theme_follows_is_dark() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn theme_mode_serializes_kebab_case() {
        #[derive(serde::Serialize)]
        struct Wrap {
            mode: ThemeMode,
        }
        let out = toml::to_string(&Wrap {
            mode: ThemeMode::System,
        })
        .expect("serialize");
        assert!(out.contains("system"), "unexpected serialization: {out}");
    }
}
