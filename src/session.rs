// SPDX-License-Identifier: MPL-2.0
//! Shared single-value state holders.
//!
//! Parts of the application resolve values at different points in the
//! process lifetime: site metadata and public settings arrive from the API,
//! the current user appears after an authentication check, and the viewport
//! class follows window resizes. Each lives in its own [`Slot`], starting
//! empty and mutated in place by whichever component resolves it.
//!
//! Convention: one writer per slot. Nothing enforces this; the application
//! is single-threaded in the Iced update loop, so no synchronization is
//! needed either.

use serde::{Deserialize, Serialize};

/// A single optional value, readable by anyone holding a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Stores a value, replacing any previous one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Clears the slot back to empty.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Returns the stored value, if resolved.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns whether a value has been resolved.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Site metadata exposed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteInfo {
    pub site_name: String,
    pub site_slogan: String,
    pub show_site_slogan: bool,
}

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// Public view of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPublic {
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Server settings exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicSettings {
    pub web_host: String,
    pub site_name: String,
    pub site_slogan: String,
    pub show_site_slogan: bool,
}

/// The application-wide set of shared state holders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Site metadata, resolved from the API at startup.
    pub site: Slot<SiteInfo>,
    /// Current user, resolved after the authentication check.
    pub user: Slot<UserPublic>,
    /// Public server settings, resolved from the API at startup.
    pub settings: Slot<PublicSettings>,
    /// Whether the window currently counts as a compact viewport.
    pub compact_viewport: Slot<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_starts_empty() {
        let slot: Slot<u32> = Slot::empty();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut slot = Slot::empty();
        slot.set("resolved");
        assert!(slot.is_set());
        assert_eq!(slot.get(), Some(&"resolved"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut slot = Slot::empty();
        slot.set(1);
        slot.set(2);
        assert_eq!(slot.get(), Some(&2));
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut slot = Slot::empty();
        slot.set(true);
        slot.clear();
        assert!(!slot.is_set());
    }

    #[test]
    fn session_slots_are_independent() {
        let mut session = Session::default();
        session.user.set(UserPublic {
            username: "alice".to_string(),
            role: UserRole::Admin,
        });

        assert!(session.user.is_set());
        assert!(!session.site.is_set());
        assert!(!session.settings.is_set());
        assert!(!session.compact_viewport.is_set());
    }

    #[test]
    fn user_role_deserializes_lowercase() {
        let user: UserPublic =
            serde_json::from_str(r#"{"username":"bob","role":"admin"}"#).expect("deserialize");
        assert_eq!(user.role, UserRole::Admin);
    }
}
