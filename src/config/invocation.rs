//! Flag scanning for `create-service-push`
//!
//! The command takes `cf push` arguments verbatim, so flags are picked out
//! by hand instead of through clap. The full argument list, our flags
//! included, is what `push` receives.

use std::path::PathBuf;

use thiserror::Error;

pub const SERVICE_MANIFEST_FLAG: &str = "--service-manifest";
pub const NO_SERVICE_MANIFEST_FLAG: &str = "--no-service-manifest";
pub const NO_PUSH_FLAG: &str = "--no-push";

/// Which manifest, if any, the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ManifestChoice {
    /// No manifest flag; use `services-manifest.yml`
    #[default]
    Default,
    Path(PathBuf),
    /// `--no-service-manifest`, or an empty path
    Disabled,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("flag --service-manifest needs a manifest file name")]
    MissingManifestPath,
}

/// The scanned command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub manifest: ManifestChoice,
    pub push: bool,
    /// Arguments for `push`: everything after the command name
    pub forwarded: Vec<String>,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            manifest: ManifestChoice::Default,
            push: true,
            forwarded: Vec::new(),
        }
    }
}

impl Invocation {
    /// Scan the arguments that follow the command name.
    ///
    /// `--service-manifest <path>` and `--no-service-manifest`: the first one
    /// seen wins. `--no-push` anywhere disables the push.
    pub fn scan(args: &[String]) -> Result<Self, InvocationError> {
        let mut manifest: Option<ManifestChoice> = None;
        let mut push = true;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                SERVICE_MANIFEST_FLAG => {
                    let value = iter.next();
                    if manifest.is_none() {
                        let path = value.ok_or(InvocationError::MissingManifestPath)?;
                        manifest = Some(choice_for(path));
                    }
                }
                NO_SERVICE_MANIFEST_FLAG => {
                    manifest.get_or_insert(ManifestChoice::Disabled);
                }
                NO_PUSH_FLAG => push = false,
                other => {
                    if let Some(path) = other.strip_prefix("--service-manifest=") {
                        manifest.get_or_insert_with(|| choice_for(path));
                    }
                }
            }
        }

        Ok(Self {
            manifest: manifest.unwrap_or_default(),
            push,
            forwarded: args.to_vec(),
        })
    }
}

fn choice_for(path: &str) -> ManifestChoice {
    if path.is_empty() {
        ManifestChoice::Disabled
    } else {
        ManifestChoice::Path(PathBuf::from(path))
    }
}
