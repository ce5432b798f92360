//! OperationState value object - status of a service's last operation
//!
//! The platform reports the state as free text. The two terminal states
//! are recognized; everything else keeps the orchestrator polling.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OperationState {
    #[default]
    Initial,
    InProgress,
    Succeeded,
    Failed,
    /// Any state the platform reports that we don't know about
    Other(String),
}

impl OperationState {
    /// Parse the platform's state string.
    ///
    /// Accepts both `in progress` (v3 API) and `in-progress`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "initial" => Self::Initial,
            "in progress" | "in-progress" | "in_progress" => Self::InProgress,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            _ => Self::Other(s.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Initial => "initial",
            Self::InProgress => "in progress",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OperationState {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
