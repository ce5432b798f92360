//! Error types for create-service-push
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ControlPlaneError;

/// Errors raised while locating, opening or parsing the service manifest.
///
/// All variants are fatal for the `create-service-push` command.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("The file {} was not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to open {}.", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid service manifest: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A required field was present but empty
    #[error("service #{index} in manifest has an empty '{field}'")]
    EmptyField { index: usize, field: &'static str },

    /// `parameters` could not be expressed as JSON (e.g. non-string keys)
    #[error("service #{index} in manifest has invalid parameters: {message}")]
    InvalidParameters { index: usize, message: String },

    #[error("failed to read service manifest: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors for a single service in the manifest.
///
/// None of these abort the batch; they are reported and the next
/// service is processed.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The `create-service` command itself failed
    #[error("{0}")]
    Create(#[source] ControlPlaneError),

    /// Listing or polling the control plane failed
    #[error("{0}")]
    Query(#[source] ControlPlaneError),

    /// The platform reported the provisioning as failed
    #[error("error {description} [status: {state}]")]
    Failed { description: String, state: String },

    /// The service did not reach a terminal state in time
    #[error("gave up waiting for {name} after {attempts} status checks (last status: {state})")]
    TimedOut {
        name: String,
        attempts: u32,
        state: String,
    },
}

/// Errors in the optional settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid settings in {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_matches_cli_output() {
        let err = ManifestError::NotFound {
            path: PathBuf::from("services-manifest.yml"),
        };
        assert_eq!(
            err.to_string(),
            "The file services-manifest.yml was not found."
        );
    }

    #[test]
    fn failed_state_embeds_description_and_state() {
        let err = ServiceError::Failed {
            description: "quota exceeded".to_string(),
            state: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "error quota exceeded [status: failed]");
    }

    #[test]
    fn empty_field_names_entry() {
        let err = ManifestError::EmptyField {
            index: 2,
            field: "name",
        };
        assert_eq!(
            err.to_string(),
            "service #2 in manifest has an empty 'name'"
        );
    }
}
