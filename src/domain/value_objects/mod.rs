//! Value Objects
//!
//! Immutable types without identity.

mod operation_state;

pub use operation_state::OperationState;
