//! The space `cf` is currently targeted at
//!
//! Read from the CLI's own `config.json` so queries only see services in
//! the targeted space, the way `cf services` does.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CfConfigFile {
    #[serde(rename = "SpaceFields", default)]
    space_fields: Option<SpaceFields>,
}

#[derive(Debug, Deserialize)]
struct SpaceFields {
    #[serde(rename = "GUID", default)]
    guid: String,
}

/// `$CF_HOME/.cf/config.json`, defaulting `CF_HOME` to the home directory
pub fn cf_config_path(cf_home: Option<PathBuf>) -> Option<PathBuf> {
    cf_home
        .or_else(dirs::home_dir)
        .map(|home| home.join(".cf").join("config.json"))
}

/// GUID of the targeted space, if any
pub fn targeted_space_guid(config_path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(config_path).ok()?;
    let config: CfConfigFile = serde_json::from_str(&content).ok()?;
    config
        .space_fields
        .map(|s| s.guid)
        .filter(|guid| !guid.is_empty())
}
