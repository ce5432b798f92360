//! Provision Event Port
//!
//! Observable interface for the service orchestrator. The console sink
//! turns these into status lines and a spinner; tests record them.

/// Event emitted while provisioning the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionEvent {
    /// Provisioning started
    Started { service_count: usize },

    /// The service is already present on the platform; nothing to do
    AlreadyExists { name: String },

    /// The service is about to be created
    Creating { name: String },

    /// A control-plane command is about to run
    CommandStarted { args: Vec<String> },

    /// One status check of an in-flight service
    Polled {
        name: String,
        attempt: u32,
        description: String,
    },

    /// The service reached `succeeded`
    Created { name: String },

    /// The service could not be provisioned
    ServiceFailed { name: String, error: String },

    /// Provisioning was interrupted by the user
    Interrupted { name: String },

    /// All services processed
    Completed {
        created: usize,
        existing: usize,
        failed: usize,
    },
}

/// Trait for receiving provision events
pub trait ProvisionEventSink {
    fn on_event(&self, event: ProvisionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ProvisionEventSink for NoopEventSink {
    fn on_event(&self, _event: ProvisionEvent) {}
}

impl<T: ProvisionEventSink + ?Sized> ProvisionEventSink for &T {
    fn on_event(&self, event: ProvisionEvent) {
        (**self).on_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingEventSink {
        events: RefCell<Vec<ProvisionEvent>>,
    }

    impl ProvisionEventSink for RecordingEventSink {
        fn on_event(&self, event: ProvisionEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events_through_reference() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };
        let by_ref = &sink;

        by_ref.on_event(ProvisionEvent::Started { service_count: 1 });
        by_ref.on_event(ProvisionEvent::Creating {
            name: "db1".to_string(),
        });

        assert_eq!(sink.events.borrow().len(), 2);
    }
}
