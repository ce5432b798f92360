//! CLI Argument Parsing
//!
//! The plugin's own flags (`--service-manifest`, `--no-service-manifest`,
//! `--no-push`) travel inside the trailing arguments of the main command
//! together with the `cf push` arguments, and are scanned by
//! `Invocation::scan`.

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Create services from a manifest, then push the application
#[derive(Parser, Debug)]
#[command(name = "create-service-push")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable the polling spinner
    #[arg(long)]
    pub no_animation: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the services in the manifest, then run `cf push`
    #[command(name = "create-service-push")]
    CreateServicePush {
        /// Plugin flags and arguments forwarded to `cf push`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        args: Vec<String>,
    },

    /// Print plugin metadata as JSON
    Metadata,

    #[command(external_subcommand)]
    Other(Vec<String>),
}
