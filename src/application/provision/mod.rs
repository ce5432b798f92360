//! Provision Use Case
//!
//! Creates the services listed in a manifest, one after another:
//! - skipping services that already exist
//! - issuing `create-service` for the rest
//! - polling each new service until it succeeds, fails or the poll budget runs out
//!
//! A failure on one service never stops the batch.

mod options;
mod result;
mod use_case;


pub use options::{PollPolicy, ProvisionOptions};
pub use result::{OutcomeStatus, ProvisionReport, ServiceOutcome};
pub use use_case::ProvisionUseCase;
