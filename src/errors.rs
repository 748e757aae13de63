//! Crate error surface, re-exported in one place.

pub use crate::adapters::AdapterError;
pub use crate::components::RegistryError;
pub use crate::connectors::ConnectorError;
pub use crate::events::{EventError, HandlerError};
