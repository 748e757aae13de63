//! In-memory component registry keyed by component name.

use std::collections::HashMap;

use thiserror::Error;

use super::component::ComponentRecord;

/// Errors from registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No component registered under the requested name.
    #[error("component not found: {name}")]
    NotFound { name: String },
}

/// Holds all known components indexed by name.
///
/// Registration is last-write-wins: registering a record under a name that
/// is already taken silently replaces the previous record. Lookups are
/// exact-match only — no partial matches, no case folding.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentRecord>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the given records.
    pub fn with_components(records: impl IntoIterator<Item = ComponentRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.register(record);
        }
        registry
    }

    /// Register a component, replacing any record with the same name.
    pub fn register(&mut self, record: ComponentRecord) {
        self.components.insert(record.name.clone(), record);
    }

    /// Look up a component by its exact name.
    pub fn get(&self, name: &str) -> Result<&ComponentRecord, RegistryError> {
        self.components.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    /// Whether a component is registered under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Names of all registered components.
    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
