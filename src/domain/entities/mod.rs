//! Domain Entities
//!
//! - `Manifest` - The ordered list of services to provision
//! - `ServiceSpec` - One requested service
//! - `RemoteService` - A service instance as reported by the platform

mod manifest;
mod remote_service;

pub use manifest::{Manifest, ServiceSpec};
pub use remote_service::{LastOperation, RemoteService};
