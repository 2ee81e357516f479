//! Known odd version locations for particular programs, plus small
//! version-string helpers.

use std::process::{Command, Stdio};

/// Alternate version invocations for programs where `--version` does not
/// answer.
pub fn version_args(name: &str) -> Option<&'static [&'static str]> {
    let args: &'static [&'static str] = match name {
        "go" => &["version"],
        "java" => &["-version"],
        "openssl" => &["version"],
        "ssh" => &["-V"],
        "zig" => &["version"],
        _ => return None,
    };
    Some(args)
}

/// Callable probes for names whose version lives somewhere unusual, or that
/// are not executables at all.
pub fn version_probe(name: &str) -> Option<fn() -> Option<String>> {
    let probe: fn() -> Option<String> = match name {
        "libc" => libc_version,
        _ => return None,
    };
    Some(probe)
}

/// glibc announces itself on the first line of `ldd --version`.
fn libc_version() -> Option<String> {
    let output = Command::new("ldd")
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;
    let text = String::from_utf8_lossy(&output.stdout);
    crate::probe::extract_version(text.lines().next()?)
}

/// Leading numeric components of a version string. Parsing stops at the
/// first segment that does not start with a digit, so `"1.2rc1"` is `[1, 2]`.
pub fn version_tuple(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map_while(|segment| {
            let digits: String = segment
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse::<u64>().ok()
        })
        .collect()
}

/// Whether `version` is at least `required`, comparing numeric components
/// and treating missing components as zero.
pub fn meets_version(version: &str, required: &str) -> bool {
    let have = version_tuple(version);
    let want = version_tuple(required);
    for i in 0..have.len().max(want.len()) {
        let h = have.get(i).copied().unwrap_or(0);
        let w = want.get(i).copied().unwrap_or(0);
        if h != w {
            return h > w;
        }
    }
    true
}
