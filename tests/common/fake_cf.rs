//! A stand-in `cf` that records its arguments.
//!
//! - every `curl` writes a notice to stderr before its JSON body
//! - `curl ...?names=<n>` answers with one instance `<n>` in state
//!   `$FAKE_CF_STATE` (default `succeeded`)
//! - `curl ...` (list) answers with the contents of `existing.json`
//! - `create-service` fails when the instance name is `broken`
//! - `push` fails when any argument is `broken-app`

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const SCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
echo "$*" >> "$dir/calls.log"
case "$1" in
  curl)
    echo "NOTICE: a newer version of the CLI is available" >&2
    case "$2" in
      *names=*)
        name=$(echo "$2" | sed 's/.*names=\([^&]*\).*/\1/')
        state="${FAKE_CF_STATE:-succeeded}"
        echo "{\"resources\":[{\"name\":\"$name\",\"last_operation\":{\"state\":\"$state\",\"description\":\"create $state\"}}]}"
        ;;
      *)
        if [ -f "$dir/existing.json" ]; then cat "$dir/existing.json"; else echo '{"resources":[]}'; fi
        ;;
    esac
    ;;
  create-service)
    if [ "$4" = "broken" ]; then echo "Server error, status code: 502"; exit 1; fi
    echo "Creating service instance $4 OK"
    ;;
  push)
    case " $* " in *" broken-app "*) echo "App staging failed"; exit 1 ;; esac
    echo "Pushed $2"
    ;;
esac
"#;

pub struct FakeCf {
    dir: PathBuf,
}

impl FakeCf {
    pub fn install(dir: &Path) -> Self {
        std::fs::create_dir_all(dir).unwrap();
        let script = dir.join("cf");
        std::fs::write(&script, SCRIPT).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn binary(&self) -> PathBuf {
        self.dir.join("cf")
    }

    /// Services the list query reports as existing
    pub fn with_existing(self, names: &[&str]) -> Self {
        let resources: Vec<String> = names
            .iter()
            .map(|n| format!(r#"{{"name":"{}","last_operation":{{"state":"succeeded","description":""}}}}"#, n))
            .collect();
        std::fs::write(
            self.dir.join("existing.json"),
            format!(r#"{{"resources":[{}]}}"#, resources.join(",")),
        )
        .unwrap();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Calls other than `curl` queries
    pub fn commands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("curl "))
            .collect()
    }
}
