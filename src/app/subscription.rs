// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Two sources feed the update loop from outside: window resizes (viewport
//! classification) and a periodic tick that re-detects the system color
//! scheme, standing in for a native preference-change event.

use super::Message;
use crate::config::THEME_POLL_INTERVAL_SECS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

pub fn subscription() -> Subscription<Message> {
    let resizes = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    });

    let theme_poll = time::every(Duration::from_secs(THEME_POLL_INTERVAL_SECS))
        .map(|_| Message::SystemThemePoll);

    Subscription::batch([resizes, theme_poll])
}
