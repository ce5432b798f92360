//! Console rendering of provision events
//!
//! Status messages are written one per line. While a service is being
//! polled, an animated terminal shows a spinner on a single rewritten
//! line; otherwise each new operation description gets its own line.

use std::cell::RefCell;
use std::io::{self, Write};

use create_service_push::domain::ports::{ProvisionEvent, ProvisionEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::spinner::Spinner;
use crate::ui::widgets::status_line::{fit_width, StatusLine};

#[derive(Debug, Default)]
struct ConsoleState {
    spinner: Spinner,
    status: StatusLine,
    last_description: Option<String>,
}

pub struct ConsoleSink<W: Write> {
    ui: UiContext,
    out: RefCell<W>,
    state: RefCell<ConsoleState>,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(ui: UiContext) -> Self {
        Self::new(ui, io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(ui: UiContext, out: W) -> Self {
        Self {
            ui,
            out: RefCell::new(out),
            state: RefCell::new(ConsoleState::default()),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, text: &str) {
        self.end_status_line();
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn end_status_line(&self) {
        let mut state = self.state.borrow_mut();
        state.last_description = None;
        if let Some(end) = state.status.finish() {
            let _ = self.out.borrow_mut().write_all(end.as_bytes());
        }
    }

    fn polled(&self, name: &str, description: &str) {
        let mut state = self.state.borrow_mut();
        let label = if description.is_empty() {
            name.to_string()
        } else {
            format!("{}: {}", name, description)
        };

        let mut out = self.out.borrow_mut();
        if self.ui.animation {
            let frame = state.spinner.next(label, self.ui.unicode);
            let max_width = usize::from(self.ui.caps.width).saturating_sub(1);
            let content = state.status.update(fit_width(&frame, max_width));
            let _ = out.write_all(content.as_bytes());
        } else {
            if state.last_description.as_deref() == Some(description) {
                return;
            }
            state.last_description = Some(description.to_string());
            let _ = writeln!(
                out,
                "{} {}",
                Icon::Progress.colored(self.ui.color, self.ui.unicode),
                label
            );
        }
        let _ = out.flush();
    }
}

impl<W: Write> ProvisionEventSink for ConsoleSink<W> {
    fn on_event(&self, event: ProvisionEvent) {
        match event {
            ProvisionEvent::Started { service_count } => {
                tracing::debug!(service_count, "provisioning services");
            }
            ProvisionEvent::AlreadyExists { name } => {
                self.line(&format!("{} already exists.", name));
            }
            ProvisionEvent::Creating { name } => {
                self.line(&format!("{} will now be created.", name));
            }
            ProvisionEvent::CommandStarted { args } => {
                self.line(&format!("Now Running CLI Command: {}", args.join(" ")));
            }
            ProvisionEvent::Polled {
                name, description, ..
            } => self.polled(&name, &description),
            ProvisionEvent::Created { name } => {
                let text = self.state.borrow().spinner.succeed(
                    &format!("{} created.", name),
                    self.ui.color,
                    self.ui.unicode,
                );
                self.line(&text);
            }
            ProvisionEvent::ServiceFailed { error, .. } => {
                self.line(&format!("Create Service Error: {}", error));
            }
            ProvisionEvent::Interrupted { name } => {
                let text = self.state.borrow().spinner.fail(
                    &format!("Interrupted while provisioning {}.", name),
                    self.ui.color,
                    self.ui.unicode,
                );
                self.line(&text);
            }
            ProvisionEvent::Completed { .. } => self.end_status_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ui: UiContext, events: Vec<ProvisionEvent>) -> String {
        let sink = ConsoleSink::new(ui, Vec::new());
        for event in events {
            sink.on_event(event);
        }
        String::from_utf8(sink.into_inner()).unwrap()
    }

    fn polled(description: &str) -> ProvisionEvent {
        ProvisionEvent::Polled {
            name: "db1".to_string(),
            attempt: 1,
            description: description.to_string(),
        }
    }

    fn creation_events() -> Vec<ProvisionEvent> {
        vec![
            ProvisionEvent::Started { service_count: 2 },
            ProvisionEvent::AlreadyExists {
                name: "cache".to_string(),
            },
            ProvisionEvent::Creating {
                name: "db1".to_string(),
            },
            ProvisionEvent::CommandStarted {
                args: vec![
                    "create-service".to_string(),
                    "mysql".to_string(),
                    "free".to_string(),
                    "db1".to_string(),
                ],
            },
            polled("create in progress"),
            polled("create in progress"),
            polled("create succeeded"),
            ProvisionEvent::Created {
                name: "db1".to_string(),
            },
            ProvisionEvent::Completed {
                created: 1,
                existing: 1,
                failed: 0,
            },
        ]
    }

    #[test]
    fn plain_output_prints_each_description_once() {
        insta::assert_snapshot!(render(UiContext::plain(), creation_events()), @r"
        cache already exists.
        db1 will now be created.
        Now Running CLI Command: create-service mysql free db1
        [..] db1: create in progress
        [..] db1: create succeeded
        [OK] db1 created.
        ");
    }

    #[test]
    fn animated_output_rewrites_one_line() {
        let ui = UiContext {
            animation: true,
            ..UiContext::plain()
        };
        let out = render(
            ui,
            vec![
                polled("create in progress"),
                polled("done"),
                ProvisionEvent::Created {
                    name: "db1".to_string(),
                },
            ],
        );
        assert_eq!(
            out,
            "\r\\ db1: create in progress\r| db1: done              \n[OK] db1 created.\n"
        );
    }

    #[test]
    fn service_errors_are_reported_and_batch_output_continues() {
        let out = render(
            UiContext::plain(),
            vec![
                ProvisionEvent::ServiceFailed {
                    name: "db1".to_string(),
                    error: "error boom [status: failed]".to_string(),
                },
                ProvisionEvent::AlreadyExists {
                    name: "db2".to_string(),
                },
            ],
        );
        insta::assert_snapshot!(out, @r"
        Create Service Error: error boom [status: failed]
        db2 already exists.
        ");
    }

    #[test]
    fn interruption_is_reported() {
        let out = render(
            UiContext::plain(),
            vec![ProvisionEvent::Interrupted {
                name: "db1".to_string(),
            }],
        );
        assert_eq!(out, "[FAIL] Interrupted while provisioning db1.\n");
    }
}
