//! The component record — a named, versioned bundle of capability flags.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A named system component with its declared capabilities.
///
/// The `name` is the unique key under which the record is registered; the
/// capability map carries boolean flags or richer typed values describing
/// what the component can do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Unique component name (registry key).
    pub name: String,

    /// Component version string.
    #[serde(default)]
    pub version: String,

    /// Capability flags and values, keyed by capability name.
    #[serde(default)]
    pub capabilities: HashMap<String, Value>,
}

impl ComponentRecord {
    /// Create a record with no capabilities.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            capabilities: HashMap::new(),
        }
    }

    /// Create a record with the given capability map.
    pub fn with_capabilities(
        name: impl Into<String>,
        version: impl Into<String>,
        capabilities: HashMap<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            capabilities,
        }
    }

    /// Look up a capability value by name.
    pub fn capability(&self, name: &str) -> Option<&Value> {
        self.capabilities.get(name)
    }

    /// Whether a capability is declared and set to boolean `true`.
    pub fn supports(&self, name: &str) -> bool {
        matches!(self.capabilities.get(name), Some(Value::Bool(true)))
    }
}
