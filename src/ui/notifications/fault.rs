// SPDX-License-Identifier: MPL-2.0
//! Adapter translating opaque remote-call error payloads into notifications.
//!
//! API error bodies have no guaranteed shape, so the adapter performs a
//! defensive runtime check on the single field it consumes instead of a
//! full deserialization: a string-typed `detail` field becomes the toast
//! body, anything else falls back to a generic message.

use super::notification::{NotificationId, Severity};
use super::queue::{Message, Queue};
use iced::Task;
use serde_json::Value;

/// Body text used when a fault carries no usable `detail` field.
pub const FALLBACK_BODY: &str = "An error occurred";

/// Extracts the human-readable body from a fault payload.
#[must_use]
pub fn fault_body(fault: &Value) -> &str {
    fault
        .get("detail")
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_BODY)
}

impl Queue {
    /// Pushes an error notification describing a remote-call fault.
    ///
    /// The title is always the caller-supplied fallback; only the body is
    /// taken from the payload, and only when it is a string.
    pub fn push_fault(
        &mut self,
        fault: &Value,
        fallback_title: impl Into<String>,
    ) -> (NotificationId, Task<Message>) {
        self.push(Severity::Error, fallback_title, fault_body(fault))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_string_becomes_body() {
        let fault = json!({ "detail": "Invalid token" });
        assert_eq!(fault_body(&fault), "Invalid token");
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(fault_body(&json!({})), FALLBACK_BODY);
    }

    #[test]
    fn non_string_detail_falls_back() {
        assert_eq!(fault_body(&json!({ "detail": 42 })), FALLBACK_BODY);
        assert_eq!(
            fault_body(&json!({ "detail": { "nested": true } })),
            FALLBACK_BODY
        );
        assert_eq!(fault_body(&json!({ "detail": null })), FALLBACK_BODY);
    }

    #[test]
    fn non_object_fault_falls_back() {
        assert_eq!(fault_body(&json!("bare string")), FALLBACK_BODY);
        assert_eq!(fault_body(&json!([1, 2, 3])), FALLBACK_BODY);
    }

    #[test]
    fn push_fault_produces_error_notification() {
        let mut queue = Queue::new();
        let fault = json!({ "detail": "Invalid token" });
        let (id, _task) = queue.push_fault(&fault, "Login failed");

        let entry = queue.iter().next().expect("entry");
        assert_eq!(entry.id(), id);
        assert_eq!(entry.severity(), Severity::Error);
        assert_eq!(entry.title(), "Login failed");
        assert_eq!(entry.body(), "Invalid token");
    }

    #[test]
    fn push_fault_without_detail_uses_fallback_body() {
        let mut queue = Queue::new();
        let (_id, _task) = queue.push_fault(&json!({}), "Login failed");

        let entry = queue.iter().next().expect("entry");
        assert_eq!(entry.severity(), Severity::Error);
        assert_eq!(entry.title(), "Login failed");
        assert_eq!(entry.body(), FALLBACK_BODY);
    }
}
