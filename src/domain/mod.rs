//! Domain Layer
//!
//! The manifest model and the platform entities it is reconciled against,
//! plus the ports the orchestrator talks through.
//!
//! ## Structure
//!
//! - `entities/` - Manifest, ServiceSpec, RemoteService
//! - `value_objects/` - OperationState
//! - `ports/` - ControlPlane and ProvisionEventSink
//!
//! Nothing in here touches the network, the file system or the terminal.

pub mod entities;
pub mod ports;
pub mod value_objects;
