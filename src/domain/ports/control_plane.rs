//! Control Plane Port
//!
//! The platform API the orchestrator provisions through. A single
//! `run_command` capability is used both for `create-service` and for
//! forwarding `push`, so the orchestrator never knows about the transport.

use thiserror::Error;

use crate::domain::entities::RemoteService;

/// Error talking to the control plane
#[derive(Error, Debug)]
pub enum ControlPlaneError {
    /// The platform CLI could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: String,
        /// Whatever the command printed before failing
        output: String,
    },

    /// The API answered with something we could not interpret
    #[error("unexpected response from `{command}`: {message}")]
    InvalidResponse { command: String, message: String },

    #[error("service instance {0} not found")]
    ServiceNotFound(String),
}

impl ControlPlaneError {
    /// Output captured from a failed command, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Access to the platform's control plane
///
/// Implementations:
/// - `CfCli` - shells out to the `cf` binary
/// - test doubles that script responses
pub trait ControlPlane {
    /// All service instances visible in the current space
    fn list_services(&self) -> Result<Vec<RemoteService>, ControlPlaneError>;

    /// A single service instance, by exact name
    fn get_service(&self, name: &str) -> Result<RemoteService, ControlPlaneError>;

    /// Run a platform CLI command and return its output
    fn run_command(&self, args: &[String]) -> Result<String, ControlPlaneError>;
}

impl<T: ControlPlane + ?Sized> ControlPlane for &T {
    fn list_services(&self) -> Result<Vec<RemoteService>, ControlPlaneError> {
        (**self).list_services()
    }

    fn get_service(&self, name: &str) -> Result<RemoteService, ControlPlaneError> {
        (**self).get_service(name)
    }

    fn run_command(&self, args: &[String]) -> Result<String, ControlPlaneError> {
        (**self).run_command(args)
    }
}
