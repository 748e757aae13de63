//! Connector dispatch — routes `connect` requests to the registered
//! connector for the source technology.

use std::collections::HashMap;
use std::sync::Arc;

use crate::components::ComponentRecord;

use super::connector::{ConnectionResult, ConnectorError, TechnologyConnector};

/// Manages connections between different technologies.
///
/// Holds the technology-name-to-connector table. Re-registering a
/// technology silently replaces its connector. The table is exclusively
/// owned by the manager; callers sharing a manager across threads must
/// synchronize mutation externally.
#[derive(Default)]
pub struct InteropManager {
    connectors: HashMap<String, Arc<dyn TechnologyConnector>>,
}

impl InteropManager {
    /// Create a manager with no connectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager seeded with the given `(technology, connector)` pairs.
    pub fn with_connectors(
        connectors: impl IntoIterator<Item = (String, Arc<dyn TechnologyConnector>)>,
    ) -> Self {
        let mut manager = Self::new();
        for (technology, connector) in connectors {
            manager.register_connector(technology, connector);
        }
        manager
    }

    /// Register a connector for a technology, replacing any existing one.
    pub fn register_connector(
        &mut self,
        technology: impl Into<String>,
        connector: Arc<dyn TechnologyConnector>,
    ) {
        self.connectors.insert(technology.into(), connector);
    }

    /// Whether a connector is registered for the given technology.
    pub fn contains(&self, technology: &str) -> bool {
        self.connectors.contains_key(technology)
    }

    /// Names of all technologies with a registered connector.
    pub fn technologies(&self) -> Vec<&str> {
        self.connectors.keys().map(String::as_str).collect()
    }

    /// Connect two components across technologies.
    ///
    /// Both technology names must be registered. The connection itself is
    /// delegated to the *source* technology's connector; the destination
    /// connector is looked up but never invoked. Connector errors are not
    /// caught here; they propagate to the caller unchanged.
    pub fn connect(
        &self,
        source_tech: &str,
        destination_tech: &str,
        source: &ComponentRecord,
        destination: &ComponentRecord,
    ) -> Result<ConnectionResult, ConnectorError> {
        let connector =
            self.connectors
                .get(source_tech)
                .ok_or_else(|| ConnectorError::UnknownTechnology {
                    technology: source_tech.to_string(),
                })?;
        if !self.connectors.contains_key(destination_tech) {
            return Err(ConnectorError::UnknownTechnology {
                technology: destination_tech.to_string(),
            });
        }

        connector.connect(source, destination)
    }
}
