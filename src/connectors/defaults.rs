//! Stock connectors for the built-in technologies.
//!
//! These report a `"connected"` status and the `(technology, destination
//! component)` pair without performing any foreign-runtime work. Callers
//! pass the set to [`InteropManager::with_connectors`] explicitly; there is
//! no implicit process-wide default.
//!
//! [`InteropManager::with_connectors`]: super::manager::InteropManager::with_connectors

use std::sync::Arc;

use crate::components::ComponentRecord;

use super::connector::{ConnectionResult, ConnectorError, TechnologyConnector};

/// The built-in technology names.
pub const DEFAULT_TECHNOLOGIES: [&str; 4] = ["Mojo", "Swift", "C++", "Java"];

/// A connector that acknowledges the link without side effects.
#[derive(Debug)]
pub struct StockConnector {
    technology: String,
}

impl StockConnector {
    /// Create a stock connector for the named technology.
    pub fn new(technology: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
        }
    }
}

impl TechnologyConnector for StockConnector {
    fn connect(
        &self,
        _source: &ComponentRecord,
        destination: &ComponentRecord,
    ) -> Result<ConnectionResult, ConnectorError> {
        Ok(ConnectionResult::connected(
            &self.technology,
            &destination.name,
        ))
    }
}

/// Stock connectors for the built-in technologies, ready to seed a manager.
pub fn default_connectors() -> Vec<(String, Arc<dyn TechnologyConnector>)> {
    DEFAULT_TECHNOLOGIES
        .iter()
        .map(|&technology| {
            (
                technology.to_string(),
                Arc::new(StockConnector::new(technology)) as Arc<dyn TechnologyConnector>,
            )
        })
        .collect()
}
