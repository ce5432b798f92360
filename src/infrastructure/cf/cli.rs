//! `ControlPlane` backed by the `cf` binary

use std::path::PathBuf;
use std::process::{Command, Stdio};

use url::form_urlencoded;

use crate::domain::entities::RemoteService;
use crate::domain::ports::{ControlPlane, ControlPlaneError};

use super::response::ServiceInstancePage;
use super::target;

const SERVICE_INSTANCES: &str = "/v3/service_instances";

/// What a finished `cf` process printed
struct CommandOutput {
    stdout: String,
    /// stdout followed by stderr
    combined: String,
}

/// Runs `cf` as a subprocess
///
/// Queries go through `cf curl` against the v3 API; commands are run as
/// `cf <args>` with their output captured.
#[derive(Debug, Clone)]
pub struct CfCli {
    binary: String,
    debug: bool,
    space_guid: Option<String>,
}

impl CfCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            debug: false,
            space_guid: None,
        }
    }

    /// Echo each command as `>> <args>` before running it
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Restrict queries to one space
    pub fn with_space_guid(mut self, guid: Option<String>) -> Self {
        self.space_guid = guid;
        self
    }

    /// Scope queries to the space `cf target` points at, if known
    pub fn targeting_current_space(self) -> Self {
        let cf_home = std::env::var_os("CF_HOME").map(PathBuf::from);
        let guid = target::cf_config_path(cf_home)
            .and_then(|path| target::targeted_space_guid(&path));
        self.with_space_guid(guid)
    }

    fn list_query(&self) -> String {
        self.instances_query(("per_page", "5000"))
    }

    fn name_query(&self, name: &str) -> String {
        self.instances_query(("names", name))
    }

    fn instances_query(&self, (key, value): (&str, &str)) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(key, value);
        if let Some(guid) = &self.space_guid {
            query.append_pair("space_guids", guid);
        }
        format!("{}?{}", SERVICE_INSTANCES, query.finish())
    }

    fn exec(&self, args: &[String]) -> Result<CommandOutput, ControlPlaneError> {
        let command = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!(command = %command, "running platform command");

        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ControlPlaneError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let mut combined = stdout.clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        if !output.status.success() {
            tracing::debug!(command = %command, status = %output.status, "platform command failed");
            return Err(ControlPlaneError::CommandFailed {
                command,
                status: output.status.to_string(),
                output: combined,
            });
        }

        if !stderr.trim().is_empty() {
            tracing::debug!(
                command = %command,
                stderr = %stderr.trim(),
                "platform command wrote to stderr"
            );
        }
        Ok(CommandOutput { stdout, combined })
    }

    fn curl(&self, path: &str) -> Result<ServiceInstancePage, ControlPlaneError> {
        let args = vec!["curl".to_string(), path.to_string()];
        let output = self.exec(&args)?;
        ServiceInstancePage::parse(&output.stdout).map_err(|message| {
            ControlPlaneError::InvalidResponse {
                command: format!("{} curl {}", self.binary, path),
                message,
            }
        })
    }
}

impl Default for CfCli {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CF_BINARY)
    }
}

impl ControlPlane for CfCli {
    fn list_services(&self) -> Result<Vec<RemoteService>, ControlPlaneError> {
        Ok(self.curl(&self.list_query())?.into_services())
    }

    fn get_service(&self, name: &str) -> Result<RemoteService, ControlPlaneError> {
        self.curl(&self.name_query(name))?
            .into_services()
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ControlPlaneError::ServiceNotFound(name.to_string()))
    }

    fn run_command(&self, args: &[String]) -> Result<String, ControlPlaneError> {
        if self.debug {
            println!(">> {}", args.join(" "));
        }
        self.exec(args).map(|output| output.combined)
    }
}
