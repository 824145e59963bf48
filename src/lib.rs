// SPDX-License-Identifier: MPL-2.0
//! `iced_herald` provides transient toast notifications, shared session
//! state cells, and system theme syncing for applications built with the
//! Iced GUI framework.
//!
//! The core is [`ui::notifications`]: an explicitly constructed
//! [`Queue`](ui::notifications::Queue) that owns the ordered list of live
//! notifications and retires each one after a fixed delay via an armed
//! one-shot task. [`session`] offers single-value state holders for data
//! resolved at runtime (site metadata, authenticated user, viewport class),
//! and [`ui::theming`] mirrors the operating system color scheme.

pub mod app;
pub mod config;
pub mod error;
pub mod session;
pub mod ui;
