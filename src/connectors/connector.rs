//! TechnologyConnector trait — the contract for linking components across
//! technology boundaries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::ComponentRecord;

/// A technology-scoped connection capability.
///
/// Implementations carry no shared state; each `connect` call is a single,
/// complete operation on the caller's thread.
pub trait TechnologyConnector: Send + Sync {
    /// Establish a connection between two components and report the result.
    fn connect(
        &self,
        source: &ComponentRecord,
        destination: &ComponentRecord,
    ) -> Result<ConnectionResult, ConnectorError>;
}

/// Outcome of a connection attempt. Returned to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResult {
    /// Connection status (e.g. `"connected"`).
    pub status: String,

    /// The `(source technology, destination)` pair the connector linked.
    pub technologies: (String, String),
}

impl ConnectionResult {
    /// A successful `"connected"` result for the given pair.
    pub fn connected(source_tech: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            status: "connected".to_string(),
            technologies: (source_tech.into(), destination.into()),
        }
    }
}

/// Connector dispatch error types.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// No connector registered for the named technology.
    #[error("no connector registered for technology: {technology}")]
    UnknownTechnology { technology: String },

    /// A connector failed to establish the connection.
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },
}
