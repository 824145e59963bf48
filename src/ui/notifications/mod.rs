// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, API errors, etc.) without blocking
//! interaction, and retire themselves after a fixed delay.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`queue`] - `Queue` service owning the live list and id counter
//! - [`fault`] - Adapter turning opaque API error payloads into toasts
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_herald::ui::notifications::{Queue, Severity, Toast};
//!
//! // Construct one queue and keep it in your application state.
//! let mut queue = Queue::new();
//!
//! // Push a notification; hand the armed expiry task to the runtime.
//! let (_id, task) = queue.push(Severity::Success, "Saved", "Your changes were saved");
//! let task = task.map(Message::Notification);
//!
//! // In your view function, render the overlay.
//! let overlay = Toast::view_overlay(&queue).map(Message::Notification);
//!
//! // In update, route notification messages back to the queue.
//! queue.handle_message(message);
//! ```

pub mod fault;
mod notification;
mod queue;
mod toast;

pub use fault::{fault_body, FALLBACK_BODY};
pub use notification::{Notification, NotificationId, Severity};
pub use queue::{Message, Queue};
pub use toast::Toast;
