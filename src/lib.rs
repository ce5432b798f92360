//! create-service-push - provision backing services, then push
//!
//! Reads a services manifest, creates every listed service that does not
//! exist yet through the Cloud Foundry CLI, waits for provisioning to
//! finish, and then forwards the remaining arguments to `cf push`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    OutcomeStatus, PollPolicy, ProvisionOptions, ProvisionReport, ProvisionUseCase, PushResult,
    PushUseCase,
};
pub use config::{Invocation, ManifestChoice, Settings};
pub use domain::entities::{LastOperation, Manifest, RemoteService, ServiceSpec};
pub use domain::ports::{ControlPlane, ControlPlaneError, ProvisionEvent, ProvisionEventSink};
pub use domain::value_objects::OperationState;
pub use error::{ConfigError, ManifestError, ServiceError};
pub use infrastructure::{load_manifest, parse_manifest, CfCli};
