//! Event value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Closed enumeration of dispatchable occurrence categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    TechnologyConnection,
    DataTransfer,
    SystemNotification,
    Error,
}

impl EventKind {
    /// Default processing priority for the kind. Lower is more urgent.
    pub fn default_priority(self) -> i32 {
        match self {
            EventKind::Error => 0,
            EventKind::SystemNotification => 5,
            EventKind::TechnologyConnection => 10,
            EventKind::DataTransfer => 15,
        }
    }
}

/// An occurrence within the system.
///
/// A value object: immutable once constructed, with no identity beyond its
/// fields. Handlers receive events by shared reference and only observe
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Occurrence category, selects which handlers run on dispatch.
    pub kind: EventKind,

    /// UTC creation time.
    pub timestamp: DateTime<Utc>,

    /// Originating component or technology.
    pub source: String,

    /// Target component or technology.
    pub destination: String,

    /// Event data.
    #[serde(default)]
    pub payload: HashMap<String, Value>,

    /// Out-of-band annotations (e.g. a `"priority"` override).
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl Event {
    /// Create an event with empty payload and metadata.
    pub fn new(kind: EventKind, source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
            source: source.into(),
            destination: destination.into(),
            payload: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Build a technology connection event from a source/destination pair.
    pub fn technology_connection(
        source: impl Into<String>,
        destination: impl Into<String>,
        payload: HashMap<String, Value>,
    ) -> Self {
        Self {
            payload,
            ..Self::new(EventKind::TechnologyConnection, source, destination)
        }
    }

    /// Build a data transfer event carrying `data` in its payload.
    pub fn data_transfer(
        source: impl Into<String>,
        destination: impl Into<String>,
        data: Value,
    ) -> Self {
        let mut payload = HashMap::new();
        payload.insert("data".to_string(), data);
        Self {
            payload,
            ..Self::new(EventKind::DataTransfer, source, destination)
        }
    }

    /// Attach a metadata entry, consuming and returning the event.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Processing priority: an integer `"priority"` metadata entry wins,
    /// otherwise the kind's default. Lower is more urgent.
    pub fn priority(&self) -> i32 {
        self.metadata
            .get("priority")
            .and_then(Value::as_i64)
            .map(|p| p as i32)
            .unwrap_or_else(|| self.kind.default_priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_technology_connection_constructor() {
        let mut payload = HashMap::new();
        payload.insert("channel".to_string(), json!("ffi"));
        let event = Event::technology_connection("Java", "C++", payload);

        assert_eq!(event.kind, EventKind::TechnologyConnection);
        assert_eq!(event.source, "Java");
        assert_eq!(event.destination, "C++");
        assert_eq!(event.payload.get("channel"), Some(&json!("ffi")));
        assert!(event.metadata.is_empty());
    }

    #[test]
    fn test_data_transfer_wraps_data_in_payload() {
        let event = Event::data_transfer("gate", "librarian", json!([1, 2, 3]));
        assert_eq!(event.kind, EventKind::DataTransfer);
        assert_eq!(event.payload.get("data"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn test_default_priorities_order_kinds() {
        assert!(
            EventKind::Error.default_priority()
                < EventKind::SystemNotification.default_priority()
        );
        assert!(
            EventKind::SystemNotification.default_priority()
                < EventKind::TechnologyConnection.default_priority()
        );
        assert!(
            EventKind::TechnologyConnection.default_priority()
                < EventKind::DataTransfer.default_priority()
        );
    }

    #[test]
    fn test_metadata_priority_overrides_default() {
        let event = Event::new(EventKind::DataTransfer, "a", "b").with_metadata("priority", json!(1));
        assert_eq!(event.priority(), 1);

        // Non-integer overrides are ignored.
        let event = Event::new(EventKind::DataTransfer, "a", "b")
            .with_metadata("priority", json!("urgent"));
        assert_eq!(event.priority(), EventKind::DataTransfer.default_priority());
    }
}
