//! The entity adapter — a component record paired with its execution
//! capability.

use std::sync::Arc;

use serde_json::Value;

use crate::components::ComponentRecord;

use super::executable::{AdapterError, Executable};

/// A component together with the capability that executes on its behalf.
///
/// The capability is injected at construction; `execute` delegates to it
/// and returns its result unchanged, errors included.
pub struct EntityAdapter {
    component: ComponentRecord,
    executable: Arc<dyn Executable>,
}

impl EntityAdapter {
    /// Pair a component with its execution capability.
    pub fn new(component: ComponentRecord, executable: Arc<dyn Executable>) -> Self {
        Self {
            component,
            executable,
        }
    }

    /// The adapted component.
    pub fn component(&self) -> &ComponentRecord {
        &self.component
    }

    /// Execute through the injected capability.
    pub fn execute(&self, args: &[Value]) -> Result<Value, AdapterError> {
        self.executable.run(args)
    }
}
