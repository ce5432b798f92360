//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports and file formats:
//!
//! - `manifest` - YAML service manifest parsing and loading
//! - `cf` - `ControlPlane` backed by the `cf` command-line tool

pub mod cf;
pub mod manifest;

pub use cf::CfCli;
pub use manifest::{find_manifest, load_manifest, parse_manifest};
