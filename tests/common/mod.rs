//! Common test utilities for create-service-push CLI tests.
//!
//! - `TestEnv`: isolated project and home directories, plus a helper to
//!   run the built binary against them
//! - `FakeCf`: a shell script standing in for the `cf` binary (Unix only)

#![allow(dead_code)]

pub mod env;
#[cfg(unix)]
pub mod fake_cf;

pub use env::*;
#[cfg(unix)]
pub use fake_cf::*;
