//! Entity adapters — components paired with an injected execution
//! capability.
//!
//! Foreign-runtime concerns (library loading, VM startup) live behind the
//! [`Executable`] trait the caller supplies at construction; adapter
//! failures are returned as [`AdapterError`] values, never printed and
//! swallowed.

/// Executable capability trait and adapter error types.
pub mod executable;

/// The entity adapter.
pub mod entity;

pub use entity::EntityAdapter;
pub use executable::{AdapterError, Executable, FnExecutable};
