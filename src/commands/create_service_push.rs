use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use create_service_push::config::{self, Invocation};
use create_service_push::infrastructure::{find_manifest, load_manifest};
use create_service_push::presentation::factory::{create_provision_use_case, create_push_use_case};

use crate::ui::console::ConsoleSink;
use crate::ui::context::UiContext;

/// Exit status after Ctrl+C
const INTERRUPTED: u8 = 130;

pub fn cmd_create_service_push(args: &[String], ui: UiContext) -> Result<ExitCode> {
    let invocation = Invocation::scan(args)?;
    let (settings, warnings) = config::load(invocation);
    crate::ui::output::print_config_warnings(&ui, &warnings);

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    }) {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
    }

    if let Some(path) = &settings.manifest {
        find_manifest(path)?;
        println!("Found ManifestFile: {}", path.display());
        let manifest = load_manifest(path)?;

        let sink = ConsoleSink::stdout(ui);
        let report = create_provision_use_case(&settings, &sink, running.clone()).execute(&manifest);
        tracing::info!(
            created = report.created_count(),
            existing = report.existing_count(),
            failed = report.failed_count(),
            "provisioning finished"
        );

        if report.was_interrupted() {
            return Ok(ExitCode::from(INTERRUPTED));
        }
    }

    if !running.load(Ordering::SeqCst) {
        return Ok(ExitCode::from(INTERRUPTED));
    }

    if settings.push {
        println!(
            "Performing a CF Push with arguments {}",
            settings.push_args.join(" ")
        );
        let result = create_push_use_case(&settings).execute(&settings.push_args);
        println!("{}", result.output);
        if let Some(e) = result.error {
            println!("ERROR while pushing: {}", e);
        }
    }

    Ok(ExitCode::SUCCESS)
}
