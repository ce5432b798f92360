//! Push Use Case
//!
//! Forwards the user's arguments to the platform's native deploy command.

use crate::domain::ports::{ControlPlane, ControlPlaneError};

/// The platform verb the forwarded arguments are appended to
pub const PUSH_VERB: &str = "push";

/// Outcome of a forwarded push
#[derive(Debug)]
pub struct PushResult {
    /// Everything the command printed, also when it failed
    pub output: String,
    pub error: Option<ControlPlaneError>,
}

impl PushResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub struct PushUseCase<CP: ControlPlane> {
    control_plane: CP,
}

impl<CP: ControlPlane> PushUseCase<CP> {
    pub fn new(control_plane: CP) -> Self {
        Self { control_plane }
    }

    /// Full argument list: `push <forwarded...>`
    pub fn command(forwarded: &[String]) -> Vec<String> {
        std::iter::once(PUSH_VERB.to_string())
            .chain(forwarded.iter().cloned())
            .collect()
    }

    pub fn execute(&self, forwarded: &[String]) -> PushResult {
        let args = Self::command(forwarded);
        match self.control_plane.run_command(&args) {
            Ok(output) => PushResult {
                output,
                error: None,
            },
            Err(e) => PushResult {
                output: e.output().unwrap_or_default().to_string(),
                error: Some(e),
            },
        }
    }
}
