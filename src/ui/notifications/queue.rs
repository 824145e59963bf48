// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Queue` owns the ordered list of live notifications and the counter
//! used to mint their identifiers. Every push arms a one-shot expiry task
//! that captures the assigned id by value; when it resolves, the entry with
//! that id is removed if it is still present. Removal is always keyed by
//! identity, never by position, so entries expiring out of order cannot
//! invalidate each other.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::DEFAULT_TOAST_DURATION;
use iced::Task;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A notification's expiry timer fired.
    Expired(NotificationId),
    /// Dismiss a specific notification by ID (e.g. toast close button).
    Dismiss(NotificationId),
}

/// Owns the live notification list and mints identifiers.
///
/// Construct one instance and hand it to whoever needs to push or render;
/// the queue is the only mutator of its list. Rendering code reads the live
/// list through [`Queue::iter`] and never holds a copy.
#[derive(Debug)]
pub struct Queue {
    entries: Vec<Notification>,
    next_id: u64,
    expiry: Duration,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    /// Creates an empty queue with the default expiry delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_expiry(DEFAULT_TOAST_DURATION)
    }

    /// Creates an empty queue whose notifications expire after `expiry`.
    #[must_use]
    pub fn with_expiry(expiry: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            expiry,
        }
    }

    /// Returns the expiry delay applied by [`Queue::push`].
    #[must_use]
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Pushes a new notification and arms its expiry timer.
    ///
    /// The notification is appended to the end of the live list and the
    /// returned task resolves to [`Message::Expired`] after the queue's
    /// expiry delay. Callers hand the task to the Iced runtime (mapping it
    /// into their own message type); dropping it instead leaves the entry
    /// pinned until dismissed, which is occasionally useful in tests.
    pub fn push(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> (NotificationId, Task<Message>) {
        self.push_with_expiry(severity, title, body, self.expiry)
    }

    /// Pushes a notification with a caller-supplied expiry delay.
    ///
    /// Used for short-lived boot banners; also the extension point for any
    /// future per-notification duration policy. Expiry order follows the
    /// delays, not insertion order.
    pub fn push_with_expiry(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        body: impl Into<String>,
        expiry: Duration,
    ) -> (NotificationId, Task<Message>) {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, severity, title, body);
        log::debug!(
            "notification {id} pushed ({severity:?}, expires in {}ms)",
            expiry.as_millis()
        );
        self.entries.push(notification);

        let task = Task::perform(
            async move {
                tokio::time::sleep(expiry).await;
            },
            move |()| Message::Expired(id),
        );
        (id, task)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Identity-based search-and-remove, shared by the expiry path and
    /// manual dismissal. Returns `true` if the notification was found and
    /// removed; an absent id is a no-op, so an expiry timer firing after a
    /// manual dismiss mutates nothing.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            log::debug!("notification {id} removed");
            true
        } else {
            false
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Expired(id) | Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Returns the live notifications in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the live list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
