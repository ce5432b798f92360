//! YAML manifest parser

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::domain::entities::{Manifest, ServiceSpec};
use crate::error::ManifestError;

#[derive(Debug, Deserialize)]
struct ManifestDocument {
    #[serde(rename = "create-services", alias = "services", default)]
    services: Vec<ServiceEntry>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    name: String,
    broker: String,
    plan: String,
    #[serde(default)]
    parameters: Option<Value>,
}

/// Parse a manifest from any reader
pub fn parse_manifest(mut reader: impl Read) -> Result<Manifest, ManifestError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }

    let document: ManifestDocument = serde_yaml_ng::from_str(&content)?;

    let services = document
        .services
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_spec(index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest::new(services))
}

/// Fail with `NotFound` when nothing exists at `path`
pub fn find_manifest(path: &Path) -> Result<&Path, ManifestError> {
    match std::fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ManifestError::NotFound {
            path: path.to_path_buf(),
        }),
        _ => Ok(path),
    }
}

/// Locate, open and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    find_manifest(path)?;

    let file = File::open(path).map_err(|source| ManifestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(io::BufReader::new(file))
}

impl ServiceEntry {
    fn into_spec(self, index: usize) -> Result<ServiceSpec, ManifestError> {
        for (field, value) in [
            ("name", &self.name),
            ("broker", &self.broker),
            ("plan", &self.plan),
        ] {
            if value.trim().is_empty() {
                return Err(ManifestError::EmptyField { index, field });
            }
        }

        let parameters = flatten_parameters(self.parameters)
            .map_err(|message| ManifestError::InvalidParameters { index, message })?;

        Ok(ServiceSpec::new(self.name, self.broker, self.plan).with_parameters(parameters))
    }
}

/// Strings pass through verbatim; structured values become compact JSON.
fn flatten_parameters(value: Option<Value>) -> Result<String, String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(other) => serde_json::to_string(&other).map_err(|e| e.to_string()),
    }
}
