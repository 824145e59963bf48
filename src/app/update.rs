// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the demo application.

use super::{App, Message};
use crate::config::{self, COMPACT_VIEWPORT_WIDTH};
use crate::ui::notifications::Severity;
use crate::ui::theming;
use iced::Task;
use serde_json::json;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Notification(msg) => {
            app.queue.handle_message(msg);
            Task::none()
        }
        Message::DemoToast(severity) => {
            let (title, body) = demo_copy(severity);
            let (_id, task) = app.queue.push(severity, title, body);
            task.map(Message::Notification)
        }
        Message::DemoFault { with_detail } => {
            let fault = if with_detail {
                json!({ "detail": "Invalid token" })
            } else {
                json!({})
            };
            let (_id, task) = app.queue.push_fault(&fault, "Login failed");
            task.map(Message::Notification)
        }
        Message::SessionResolved {
            site,
            user,
            settings,
        } => {
            app.session.site.set(site);
            app.session.user.set(user);
            app.session.settings.set(settings);
            Task::none()
        }
        Message::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            if let Err(err) = config::save(&app.config) {
                log::warn!("could not persist theme mode: {err}");
            }
            Task::none()
        }
        Message::SystemThemePoll => {
            app.system_dark = theming::system_prefers_dark();
            Task::none()
        }
        Message::WindowResized(size) => {
            app.session
                .compact_viewport
                .set(size.width < COMPACT_VIEWPORT_WIDTH);
            Task::none()
        }
    }
}

/// Canned title/body pairs for the demo buttons.
fn demo_copy(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Info => ("Heads up", "A new extension directory is available"),
        Severity::Success => ("Saved", "Your changes were saved"),
        Severity::Warning => ("Almost full", "Only two extensions remain in this range"),
        Severity::Error => ("Call failed", "The remote side hung up unexpectedly"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Message as NotificationMessage;
    use iced::Size;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn demo_toast_lands_in_queue() {
        let mut app = app();
        let _task = update(&mut app, Message::DemoToast(Severity::Success));

        assert_eq!(app.queue.len(), 1);
        let entry = app.queue.iter().next().expect("entry");
        assert_eq!(entry.severity(), Severity::Success);
        assert_eq!(entry.title(), "Saved");
    }

    #[test]
    fn fault_with_detail_uses_payload_body() {
        let mut app = app();
        let _task = update(&mut app, Message::DemoFault { with_detail: true });

        let entry = app.queue.iter().next().expect("entry");
        assert_eq!(entry.severity(), Severity::Error);
        assert_eq!(entry.title(), "Login failed");
        assert_eq!(entry.body(), "Invalid token");
    }

    #[test]
    fn fault_without_detail_uses_fallback_body() {
        let mut app = app();
        let _task = update(&mut app, Message::DemoFault { with_detail: false });

        let entry = app.queue.iter().next().expect("entry");
        assert_eq!(entry.body(), "An error occurred");
    }

    #[test]
    fn expiry_message_removes_the_entry() {
        let mut app = app();
        let _task = update(&mut app, Message::DemoToast(Severity::Info));
        let id = app.queue.iter().next().expect("entry").id();

        let _task = update(
            &mut app,
            Message::Notification(NotificationMessage::Expired(id)),
        );
        assert!(app.queue.is_empty());

        // A second fire for the same id is a no-op.
        let _task = update(
            &mut app,
            Message::Notification(NotificationMessage::Expired(id)),
        );
        assert!(app.queue.is_empty());
    }

    #[test]
    fn resize_classifies_viewport() {
        let mut app = app();
        let _task = update(&mut app, Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(app.session.compact_viewport.get(), Some(&true));

        let _task = update(&mut app, Message::WindowResized(Size::new(1024.0, 768.0)));
        assert_eq!(app.session.compact_viewport.get(), Some(&false));
    }
}
