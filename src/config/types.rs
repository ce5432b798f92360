//! Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::application::PollPolicy;

/// Default manifest looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "services-manifest.yml";

/// Default platform CLI binary
pub const DEFAULT_CF_BINARY: &str = "cf";

/// `[cf]` section of the settings file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CfConfig {
    #[serde(default = "default_cf_binary")]
    pub binary: String,
}

impl Default for CfConfig {
    fn default() -> Self {
        Self {
            binary: default_cf_binary(),
        }
    }
}

fn default_cf_binary() -> String {
    DEFAULT_CF_BINARY.to_string()
}

/// `[poll]` section of the settings file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PollConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,

    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_ms: default_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
            backoff_factor: default_backoff_factor(),
        }
    }
}

fn default_max_attempts() -> u32 {
    PollPolicy::default().max_attempts
}

fn default_interval_ms() -> u64 {
    PollPolicy::default().interval.as_millis() as u64
}

fn default_max_interval_ms() -> u64 {
    PollPolicy::default().max_interval.as_millis() as u64
}

fn default_backoff_factor() -> f64 {
    PollPolicy::default().backoff_factor
}

impl PollConfig {
    pub fn to_policy(&self) -> PollPolicy {
        PollPolicy {
            max_attempts: self.max_attempts,
            interval: Duration::from_millis(self.interval_ms),
            max_interval: Duration::from_millis(self.max_interval_ms),
            backoff_factor: self.backoff_factor,
        }
    }
}

/// Contents of `create-service-push.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub cf: CfConfig,

    #[serde(default)]
    pub poll: PollConfig,
}

/// Everything one invocation needs, assembled once at startup
///
/// Precedence, highest first: flags, environment, settings file, defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Manifest to read; `None` when disabled with `--no-service-manifest`
    pub manifest: Option<PathBuf>,
    /// Whether to forward `push` after provisioning
    pub push: bool,
    /// Arguments forwarded to `push`
    pub push_args: Vec<String>,
    pub cf_binary: String,
    /// Echo every control-plane command before running it
    pub debug: bool,
    pub poll: PollPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest: Some(PathBuf::from(DEFAULT_MANIFEST)),
            push: true,
            push_args: Vec::new(),
            cf_binary: DEFAULT_CF_BINARY.to_string(),
            debug: false,
            poll: PollPolicy::default(),
        }
    }
}
