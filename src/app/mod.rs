// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notification queue, session state, and
//! theming together.
//!
//! The `App` struct keeps policy decisions (toast duration resolution,
//! banner lifetime, viewport classification) close to the main update loop
//! so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, BANNER_DISMISS_MS};
use crate::session::{PublicSettings, Session, SiteInfo, UserPublic, UserRole};
use crate::ui::notifications::{Queue, Severity};
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Root Iced application state bridging the notification queue, the shared
/// session slots, and persisted preferences.
#[derive(Debug)]
pub struct App {
    /// Toast notification queue; sole owner of the live list.
    queue: Queue,
    /// Shared single-value state holders.
    session: Session,
    /// Persisted preferences.
    config: Config,
    /// Selected theme mode.
    theme_mode: ThemeMode,
    /// Last detected system color scheme (refreshed by the poll tick).
    system_dark: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            queue: Queue::new(),
            session: Session::default(),
            config: Config::default(),
            theme_mode: ThemeMode::System,
            system_dark: theming::system_prefers_dark(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and flags, arms the boot
    /// banner for any config warning, and kicks off session resolution.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let toast_duration = flags
            .toast_ms
            .map_or_else(|| config.notifications.toast_duration(), Duration::from_millis);

        let mut app = App {
            queue: Queue::with_expiry(toast_duration),
            theme_mode: config.general.theme_mode,
            config,
            ..Self::default()
        };

        let mut tasks = Vec::new();

        // Boot banners close quickly, like server-rendered alerts.
        if let Some(warning) = config_warning {
            let (_id, task) = app.queue.push_with_expiry(
                Severity::Warning,
                "Settings",
                warning,
                Duration::from_millis(BANNER_DISMISS_MS),
            );
            tasks.push(task.map(Message::Notification));
        }

        // Imitates the startup API round-trip that resolves the session.
        tasks.push(Task::perform(async { demo_session() }, |(site, user, settings)| {
            Message::SessionResolved {
                site,
                user,
                settings,
            }
        }));

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.session
            .site
            .get()
            .map_or_else(|| "IcedHerald".to_string(), |site| site.site_name.clone())
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if self.system_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription()
    }
}

/// Placeholder session payload standing in for the API responses.
fn demo_session() -> (SiteInfo, UserPublic, PublicSettings) {
    let site = SiteInfo {
        site_name: "Herald Demo".to_string(),
        site_slogan: "Toast, but for desktops".to_string(),
        show_site_slogan: true,
    };
    let user = UserPublic {
        username: "demo".to_string(),
        role: UserRole::User,
    };
    let settings = PublicSettings {
        web_host: "127.0.0.1:8000".to_string(),
        site_name: site.site_name.clone(),
        site_slogan: site.site_slogan.clone(),
        show_site_slogan: site.show_site_slogan,
    };
    (site, user, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_toast_duration() {
        let (app, _task) = App::new(Flags {
            toast_ms: Some(1234),
        });
        assert_eq!(app.queue.expiry(), Duration::from_millis(1234));
    }

    #[test]
    fn explicit_theme_modes_resolve_directly() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
        app.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn title_uses_site_name_once_resolved() {
        let mut app = App::default();
        assert_eq!(app.title(), "IcedHerald");

        let (site, _user, _settings) = demo_session();
        app.session.site.set(site);
        assert_eq!(app.title(), "Herald Demo");
    }
}
