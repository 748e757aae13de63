//! Executable capability — the contract an adapter executes through.

use serde_json::Value;
use thiserror::Error;

/// An injected execution capability.
///
/// What stands behind `run` (an in-process function, a bridge into a
/// foreign runtime) is the caller's choice; the adapter only sees this
/// contract.
pub trait Executable: Send + Sync {
    /// Run with the given arguments and return the result.
    fn run(&self, args: &[Value]) -> Result<Value, AdapterError>;
}

/// Wraps a plain function or closure as an [`Executable`].
pub struct FnExecutable<F>(F);

impl<F> FnExecutable<F>
where
    F: Fn(&[Value]) -> Result<Value, AdapterError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Executable for FnExecutable<F>
where
    F: Fn(&[Value]) -> Result<Value, AdapterError> + Send + Sync,
{
    fn run(&self, args: &[Value]) -> Result<Value, AdapterError> {
        (self.0)(args)
    }
}

/// Adapter error types.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The runtime backing the capability could not be reached or started.
    #[error("{technology} runtime unavailable: {reason}")]
    RuntimeUnavailable { technology: String, reason: String },

    /// The capability ran but failed.
    #[error("execution failed: {message}")]
    ExecutionFailed { message: String },
}
