//! Provision Use Case
//!
//! Walks the manifest in order and provisions every service through the
//! control plane.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::entities::{Manifest, ServiceSpec};
use crate::domain::ports::{ControlPlane, ProvisionEvent, ProvisionEventSink};
use crate::domain::value_objects::OperationState;
use crate::error::ServiceError;

use super::options::ProvisionOptions;
use super::result::{OutcomeStatus, ProvisionReport, ServiceOutcome};

/// Longest stretch a poll delay sleeps before checking for an interrupt
const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Provision use case - creates manifest services that don't exist yet
pub struct ProvisionUseCase<CP, ES>
where
    CP: ControlPlane,
    ES: ProvisionEventSink,
{
    control_plane: CP,
    events: ES,
    options: ProvisionOptions,
    running: Arc<AtomicBool>,
}

impl<CP, ES> ProvisionUseCase<CP, ES>
where
    CP: ControlPlane,
    ES: ProvisionEventSink,
{
    pub fn new(control_plane: CP, events: ES, options: ProvisionOptions) -> Self {
        Self {
            control_plane,
            events,
            options,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Share a flag that is cleared when the user asks to stop
    pub fn with_running_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = running;
        self
    }

    /// Provision every service in the manifest
    ///
    /// Per-service failures are recorded in the report and never abort the
    /// batch. An interrupt stops after the service being waited on.
    pub fn execute(&self, manifest: &Manifest) -> ProvisionReport {
        let mut report = ProvisionReport::new();
        self.events.on_event(ProvisionEvent::Started {
            service_count: manifest.len(),
        });

        for spec in manifest {
            if !self.is_running() {
                break;
            }

            let status = self.provision(spec);
            self.emit_outcome(spec.name(), &status);

            let interrupted = matches!(status, OutcomeStatus::Interrupted);
            report.push(ServiceOutcome::new(spec.name(), status));
            if interrupted {
                break;
            }
        }

        self.events.on_event(ProvisionEvent::Completed {
            created: report.created_count(),
            existing: report.existing_count(),
            failed: report.failed_count(),
        });
        report
    }

    fn provision(&self, spec: &ServiceSpec) -> OutcomeStatus {
        let existing = match self.control_plane.list_services() {
            Ok(services) => services,
            Err(e) => return OutcomeStatus::Failed(ServiceError::Query(e)),
        };

        if existing.iter().any(|s| s.name == spec.name()) {
            tracing::debug!(service = spec.name(), "service already exists");
            self.events.on_event(ProvisionEvent::AlreadyExists {
                name: spec.name().to_string(),
            });
            return OutcomeStatus::AlreadyExists;
        }

        self.events.on_event(ProvisionEvent::Creating {
            name: spec.name().to_string(),
        });

        let args = spec.create_command();
        self.events.on_event(ProvisionEvent::CommandStarted { args: args.clone() });
        if let Err(e) = self.control_plane.run_command(&args) {
            tracing::debug!(service = spec.name(), error = %e, "create-service failed");
            return OutcomeStatus::Failed(ServiceError::Create(e));
        }

        self.wait_until_provisioned(spec.name())
    }

    fn wait_until_provisioned(&self, name: &str) -> OutcomeStatus {
        let policy = self.options.poll;
        let mut delays = policy.intervals();
        let mut last_state = OperationState::default();

        for attempt in 1..=policy.attempts() {
            let service = match self.control_plane.get_service(name) {
                Ok(service) => service,
                Err(e) => return OutcomeStatus::Failed(ServiceError::Query(e)),
            };
            let operation = service.last_operation;
            tracing::debug!(
                service = name,
                attempt,
                state = %operation.state,
                "polled service status"
            );

            self.events.on_event(ProvisionEvent::Polled {
                name: name.to_string(),
                attempt,
                description: operation.description.clone(),
            });

            if operation.state.is_terminal() {
                if operation.state == OperationState::Succeeded {
                    return OutcomeStatus::Created;
                }
                return OutcomeStatus::Failed(ServiceError::Failed {
                    description: operation.description,
                    state: operation.state.to_string(),
                });
            }
            last_state = operation.state;

            let Some(delay) = delays.next() else {
                break;
            };
            if !self.sleep_while_running(delay) {
                return OutcomeStatus::Interrupted;
            }
        }

        OutcomeStatus::Failed(ServiceError::TimedOut {
            name: name.to_string(),
            attempts: policy.attempts(),
            state: last_state.to_string(),
        })
    }

    fn emit_outcome(&self, name: &str, status: &OutcomeStatus) {
        let event = match status {
            OutcomeStatus::AlreadyExists => return,
            OutcomeStatus::Created => ProvisionEvent::Created {
                name: name.to_string(),
            },
            OutcomeStatus::Failed(e) => ProvisionEvent::ServiceFailed {
                name: name.to_string(),
                error: e.to_string(),
            },
            OutcomeStatus::Interrupted => ProvisionEvent::Interrupted {
                name: name.to_string(),
            },
        };
        self.events.on_event(event);
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Sleep for `delay` in short slices; false as soon as the flag is cleared
    fn sleep_while_running(&self, delay: Duration) -> bool {
        let started = Instant::now();
        loop {
            if !self.is_running() {
                return false;
            }
            let remaining = delay.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                return true;
            }
            thread::sleep(remaining.min(SLEEP_SLICE));
        }
    }
}
