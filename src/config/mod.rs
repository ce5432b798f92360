//! Configuration module
//!
//! Settings are assembled once per invocation, in this order of priority:
//! 1. Command-line flags (`--service-manifest`, `--no-service-manifest`, `--no-push`)
//! 2. Environment variables (`DEBUG`, `CSP_*`)
//! 3. Project settings (`./create-service-push.toml`)
//! 4. User settings (`<config dir>/create-service-push/config.toml`)
//! 5. Built-in defaults
//!
//! The resulting `Settings` is passed by value; there is no global state.

mod invocation;
mod loader;
mod types;

pub use invocation::{
    Invocation, InvocationError, ManifestChoice, NO_PUSH_FLAG, NO_SERVICE_MANIFEST_FLAG,
    SERVICE_MANIFEST_FLAG,
};
pub use loader::{
    assemble, discover_config_file, load, load_file_config, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{CfConfig, FileConfig, PollConfig, Settings, DEFAULT_CF_BINARY, DEFAULT_MANIFEST};
