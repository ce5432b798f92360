//! RemoteService entity - a service instance owned by the platform
//!
//! We only ever observe these through the control plane.

use crate::domain::value_objects::OperationState;

/// Status of the most recent operation on a service instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastOperation {
    pub description: String,
    pub state: OperationState,
}

impl LastOperation {
    pub fn new(state: OperationState, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteService {
    pub name: String,
    pub last_operation: LastOperation,
}

impl RemoteService {
    pub fn new(name: impl Into<String>, last_operation: LastOperation) -> Self {
        Self {
            name: name.into(),
            last_operation,
        }
    }
}
