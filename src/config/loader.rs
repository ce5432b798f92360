//! Settings loading
//!
//! Assembles `Settings` from defaults, the optional settings file,
//! environment overrides and the scanned command line.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::invocation::{Invocation, ManifestChoice};
use super::types::{FileConfig, Settings, DEFAULT_MANIFEST};

/// Settings file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "create-service-push.toml";

/// Non-fatal problem found while loading settings
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// An environment override that could not be parsed (and was ignored)
    InvalidEnv { var: String, value: String },
    /// The settings file could not be used at all; defaults apply
    UnusableFile { message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                match line {
                    Some(line) => write!(f, "Unknown setting '{}' in {}:{}", key, file.display(), line)?,
                    None => write!(f, "Unknown setting '{}' in {}", key, file.display())?,
                }
                if let Some(s) = suggestion {
                    write!(f, " (did you mean '{}'?)", s)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv { var, value } => {
                write!(f, "Ignoring {}={}: not a valid number", var, value)
            }
            ConfigWarning::UnusableFile { message } => {
                write!(f, "{} (using defaults)", message)
            }
        }
    }
}

/// Read a settings file, collecting unknown keys as warnings
pub fn load_file_config(path: &Path) -> Result<(FileConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: FileConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project settings file first, then `<config dir>/create-service-push/config.toml`
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("create-service-push").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Load settings for this process: settings file, real environment, flags
pub fn load(invocation: Invocation) -> (Settings, Vec<ConfigWarning>) {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut warnings = Vec::new();

    let file_config = match discover_config_file(&cwd) {
        Some(path) => match load_file_config(&path) {
            Ok((config, file_warnings)) => {
                tracing::debug!(path = %path.display(), "loaded settings file");
                warnings.extend(file_warnings);
                config
            }
            Err(e) => {
                warnings.push(ConfigWarning::UnusableFile {
                    message: e.to_string(),
                });
                FileConfig::default()
            }
        },
        None => FileConfig::default(),
    };

    let (settings, env_warnings) =
        assemble(invocation, &file_config, |key| std::env::var(key).ok());
    warnings.extend(env_warnings);
    (settings, warnings)
}

/// Combine the layers; `get_env` abstracts the process environment
pub fn assemble(
    invocation: Invocation,
    file_config: &FileConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Settings, Vec<ConfigWarning>) {
    let mut settings = Settings {
        cf_binary: file_config.cf.binary.clone(),
        poll: file_config.poll.to_policy(),
        ..Settings::default()
    };
    let warnings = apply_env_overrides(&mut settings, &get_env);

    settings.manifest = match invocation.manifest {
        ManifestChoice::Default => Some(PathBuf::from(DEFAULT_MANIFEST)),
        ManifestChoice::Path(path) => Some(path),
        ManifestChoice::Disabled => None,
    };
    settings.push = invocation.push;
    settings.push_args = invocation.forwarded;

    (settings, warnings)
}

/// Apply `DEBUG` and `CSP_*` environment overrides
fn apply_env_overrides(
    settings: &mut Settings,
    get_env: &impl Fn(&str) -> Option<String>,
) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    settings.debug = get_env("DEBUG").is_some_and(|v| !v.is_empty());

    if let Some(binary) = get_env("CSP_CF_BINARY").filter(|v| !v.trim().is_empty()) {
        settings.cf_binary = binary;
    }

    if let Some(v) = parse_env::<u32>(get_env, "CSP_POLL_MAX_ATTEMPTS", &mut warnings) {
        settings.poll.max_attempts = v;
    }
    if let Some(v) = parse_env::<u64>(get_env, "CSP_POLL_INTERVAL_MS", &mut warnings) {
        settings.poll.interval = std::time::Duration::from_millis(v);
    }
    if let Some(v) = parse_env::<u64>(get_env, "CSP_POLL_MAX_INTERVAL_MS", &mut warnings) {
        settings.poll.max_interval = std::time::Duration::from_millis(v);
    }
    if let Some(v) = parse_env::<f64>(get_env, "CSP_POLL_BACKOFF", &mut warnings) {
        settings.poll.backoff_factor = v;
    }

    warnings
}

fn parse_env<T: std::str::FromStr>(
    get_env: &impl Fn(&str) -> Option<String>,
    var: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> Option<T> {
    let raw = get_env(var)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warnings.push(ConfigWarning::InvalidEnv {
                var: var.to_string(),
                value: raw,
            });
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cf",
        "binary",
        "poll",
        "max_attempts",
        "interval_ms",
        "max_interval_ms",
        "backoff_factor",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
