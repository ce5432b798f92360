//! create-service-push - create services from a manifest, then `cf push`
//!
//! Usage: create-service-push create-service-push [--service-manifest <file> | --no-service-manifest] [--no-push] [<push args>...]

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let ui = ui::context::UiContext::new(cli.color, cli.no_animation);

    let result = match cli.command {
        Commands::CreateServicePush { args } => {
            commands::create_service_push::cmd_create_service_push(&args, ui)
        }
        Commands::Metadata => commands::metadata::cmd_metadata().map(|()| ExitCode::SUCCESS),
        Commands::Other(args) => {
            tracing::debug!(command = ?args.first(), "ignoring command");
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            ui::output::print_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
