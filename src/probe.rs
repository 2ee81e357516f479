use std::fmt;
use std::io;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::knowledge;

pub const NOT_INSTALLED: &str = "Not installed";
pub const VERSION_UNKNOWN: &str = "Version unknown";
pub const TROUBLE_PROBING: &str = "Trouble probing";

/// Outcome of a version lookup for a single package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Unknown,
    NotInstalled,
    Trouble,
}

impl Resolution {
    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Resolved(version) => version,
            Resolution::Unknown => VERSION_UNKNOWN,
            Resolution::NotInstalled => NOT_INSTALLED,
            Resolution::Trouble => TROUBLE_PROBING,
        }
    }

    pub fn is_installed(&self) -> bool {
        !matches!(self, Resolution::NotInstalled)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("program not found")]
    NotFound,
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Resolve the installed version of `name`, trying in order: the program's
/// own `--version`, an alternate invocation from the knowledge table, a
/// registered callable probe, and finally `pkg-config` for names that are
/// shared libraries rather than executables.
pub fn resolve_version(name: &str) -> Resolution {
    let mut missing = false;

    match probe_command(name, &["--version"]) {
        Ok(Some(version)) => return Resolution::Resolved(version),
        Ok(None) => {}
        Err(ProbeError::NotFound) => missing = true,
        Err(err) => {
            tracing::debug!(program = name, error = %err, "version probe failed");
            return Resolution::Trouble;
        }
    }

    if !missing {
        if let Some(args) = knowledge::version_args(name) {
            if let Ok(Some(version)) = probe_command(name, args) {
                return Resolution::Resolved(version);
            }
        }
    }

    if let Some(probe) = knowledge::version_probe(name) {
        if let Some(version) = probe() {
            return Resolution::Resolved(version);
        }
    }

    if let Some(version) = pkg_config_version(name) {
        return Resolution::Resolved(version);
    }

    if missing {
        Resolution::NotInstalled
    } else {
        Resolution::Unknown
    }
}

/// Run `program args...` and pull a version token out of its output.
/// `Ok(None)` means the program ran but printed nothing version-shaped.
pub(crate) fn probe_command(program: &str, args: &[&str]) -> Result<Option<String>, ProbeError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ProbeError::NotFound,
            _ => ProbeError::Spawn {
                program: program.to_string(),
                source: err,
            },
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(version) = extract_version(&stdout) {
        return Ok(Some(version));
    }

    // Some tools (java -version, ssh -V) report on stderr.
    let stderr = String::from_utf8_lossy(&output.stderr);
    Ok(extract_version(&stderr))
}

fn pkg_config_version(name: &str) -> Option<String> {
    let output = Command::new("pkg-config")
        .args(["--modversion", name])
        .stdin(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!version.is_empty()).then_some(version)
}

/// First dotted version token in `text`, keeping any pre-release or build
/// suffix attached to it.
pub(crate) fn extract_version(text: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"\d+(?:\.\d+)+(?:[-+][0-9A-Za-z][0-9A-Za-z.+-]*)?").unwrap());
    pattern.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_version() {
        assert_eq!(
            extract_version("git version 2.45.2"),
            Some("2.45.2".to_string())
        );
    }

    #[test]
    fn extracts_first_token_only() {
        assert_eq!(
            extract_version("cmake version 3.28.3\nCMake suite maintained by Kitware"),
            Some("3.28.3".to_string())
        );
    }

    #[test]
    fn requires_a_dotted_number() {
        assert_eq!(extract_version("usage: tool [options]"), None);
        assert_eq!(extract_version("revision 42"), None);
    }

    #[test]
    fn keeps_prerelease_suffix() {
        assert_eq!(
            extract_version("zig 0.12.0-dev.1664+8ca4a5240"),
            Some("0.12.0-dev.1664+8ca4a5240".to_string())
        );
    }

    #[test]
    fn ignores_dash_separated_dates() {
        assert_eq!(
            extract_version("rustc 1.80.0 (051478957 2024-07-21)"),
            Some("1.80.0".to_string())
        );
    }

    #[test]
    fn unresolvable_name_is_not_installed() {
        assert_eq!(
            resolve_version("no-such-tool-envreport-test"),
            Resolution::NotInstalled
        );
    }

    #[test]
    fn unrunnable_path_is_trouble() {
        // A directory exists but cannot be spawned, so the failure is not
        // a plain not-found.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().into_owned();
        assert_eq!(resolve_version(&path), Resolution::Trouble);
    }
}
