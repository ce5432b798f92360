//! Plugin metadata
//!
//! What the platform CLI needs to register the command: name, version,
//! minimum CLI version and usage text.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{NO_PUSH_FLAG, NO_SERVICE_MANIFEST_FLAG, SERVICE_MANIFEST_FLAG};

pub const PLUGIN_NAME: &str = "Create-Service-Push";
pub const COMMAND_NAME: &str = "create-service-push";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionType {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl VersionType {
    fn parse(s: &str) -> Self {
        let mut parts = s.split('.').map(|p| p.parse().unwrap_or(0));
        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            build: parts.next().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usage {
    pub usage: String,
    pub options: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMetadata {
    pub name: String,
    pub help_text: String,
    pub usage_details: Usage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMetadata {
    pub name: String,
    pub version: VersionType,
    pub min_cli_version: VersionType,
    pub commands: Vec<CommandMetadata>,
}

pub fn plugin_metadata() -> PluginMetadata {
    let options = BTreeMap::from([
        (
            format!("{} <MANIFEST_FILE>", SERVICE_MANIFEST_FLAG),
            "Specify the fullpath and filename of the services creation manifest.  Defaults to services-manifest.yml.".to_string(),
        ),
        (
            NO_SERVICE_MANIFEST_FLAG.to_string(),
            "Specifies that there is no service creation manifest".to_string(),
        ),
        (
            NO_PUSH_FLAG.to_string(),
            "Create the services but do not push the application".to_string(),
        ),
    ]);

    PluginMetadata {
        name: PLUGIN_NAME.to_string(),
        version: VersionType::parse(env!("CARGO_PKG_VERSION")),
        min_cli_version: VersionType {
            major: 6,
            minor: 7,
            build: 0,
        },
        commands: vec![CommandMetadata {
            name: COMMAND_NAME.to_string(),
            help_text: "Works in the same manner as cf push, except that it will create services defined in a services-manifest.yml file first before performing a cf push.".to_string(),
            usage_details: Usage {
                usage: format!("{0}\n   cf {0}", COMMAND_NAME),
                options,
            },
        }],
    }
}
