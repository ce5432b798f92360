//! Application Layer
//!
//! Use cases that drive the domain ports:
//!
//! - `ProvisionUseCase` - create every service in the manifest and wait for it
//! - `PushUseCase` - forward the remaining arguments to `push`

pub mod provision;
pub mod push;

pub use provision::{
    OutcomeStatus, PollPolicy, ProvisionOptions, ProvisionReport, ProvisionUseCase,
    ServiceOutcome,
};
pub use push::{PushResult, PushUseCase};
