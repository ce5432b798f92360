//! Presentation Layer
//!
//! - `factory` - Creates use cases with infrastructure dependencies wired up
//! - `metadata` - Plugin metadata (name, version, command usage)

pub mod factory;
pub mod metadata;

pub use factory::{create_control_plane, create_provision_use_case, create_push_use_case};
pub use metadata::{plugin_metadata, PluginMetadata};
