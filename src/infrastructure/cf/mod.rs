//! Cloud Foundry CLI adapter

mod cli;
mod response;
mod target;

pub use cli::CfCli;
pub use target::{cf_config_path, targeted_space_guid};
