//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete implementations.

pub mod control_plane;
pub mod provision_events;

pub use control_plane::{ControlPlane, ControlPlaneError};
pub use provision_events::{NoopEventSink, ProvisionEvent, ProvisionEventSink};
