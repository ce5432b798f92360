//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::application::{ProvisionOptions, ProvisionUseCase, PushUseCase};
use crate::config::Settings;
use crate::domain::ports::ProvisionEventSink;
use crate::infrastructure::CfCli;

/// `cf` adapter configured from settings, scoped to the targeted space
pub fn create_control_plane(settings: &Settings) -> CfCli {
    CfCli::new(settings.cf_binary.clone())
        .with_debug(settings.debug)
        .targeting_current_space()
}

/// Provision use case against the real `cf` binary
pub fn create_provision_use_case<ES: ProvisionEventSink>(
    settings: &Settings,
    events: ES,
    running: Arc<AtomicBool>,
) -> ProvisionUseCase<CfCli, ES> {
    let options = ProvisionOptions::new().with_poll(settings.poll);
    ProvisionUseCase::new(create_control_plane(settings), events, options)
        .with_running_flag(running)
}

pub fn create_push_use_case(settings: &Settings) -> PushUseCase<CfCli> {
    PushUseCase::new(create_control_plane(settings))
}
