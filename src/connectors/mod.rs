//! Technology connectors and the per-technology dispatch manager.
//!
//! A connector is a technology-scoped capability that links two component
//! instances and reports a [`ConnectionResult`]. The [`InteropManager`]
//! keeps the technology-name-to-connector table and routes `connect`
//! requests through it.

/// Connector trait and connection result type.
pub mod connector;

/// Stock connectors for the built-in technologies.
pub mod defaults;

/// The interoperability manager (connector dispatch).
pub mod manager;

pub use connector::{ConnectionResult, ConnectorError, TechnologyConnector};
pub use defaults::default_connectors;
pub use manager::InteropManager;
