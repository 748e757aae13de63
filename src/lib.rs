//! # interop-gate
//!
//! Component registry, connector dispatch, and synchronous event core for a
//! cross-technology interoperability gate.
//!
//! The crate provides:
//! - a name-keyed [`ComponentRegistry`](components::ComponentRegistry) of
//!   [`ComponentRecord`](components::ComponentRecord)s with last-write-wins
//!   registration;
//! - an [`InteropManager`](connectors::InteropManager) routing `connect`
//!   requests to per-technology [`TechnologyConnector`](connectors::TechnologyConnector)s;
//! - an [`EventDispatcher`](events::EventDispatcher) with ordered per-kind
//!   handler lists, synchronous dispatch, and a priority queue;
//! - an adapter layer where execution capabilities are injected as
//!   [`Executable`](adapters::Executable)s and failures are returned, not
//!   swallowed;
//! - a YAML-backed [`SystemCatalog`](catalog::SystemCatalog) describing the
//!   known components, with fall-back-to-empty loading.
//!
//! All operations run to completion on the caller's thread. The managers
//! provide no internal locking; concurrent mutation requires external
//! synchronization.

pub mod adapters;
pub mod catalog;
pub mod components;
pub mod connectors;
pub mod errors;
pub mod events;

pub use adapters::{EntityAdapter, Executable, FnExecutable};
pub use catalog::{ComponentDescription, SystemCatalog};
pub use components::{ComponentRecord, ComponentRegistry};
pub use connectors::{
    default_connectors, ConnectionResult, InteropManager, TechnologyConnector,
};
pub use events::{Event, EventDispatcher, EventKind, EventListener, LogListener};

/// Library version.
pub const VERSION: &str = "0.1.0";
