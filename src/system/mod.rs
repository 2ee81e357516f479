use std::process::{Command, Stdio};

use serde::Serialize;
use sysinfo::{Disks, System};

/// Hardware and OS facts for the report header. Every field is best effort;
/// collection never fails.
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    pub os: String,
    pub kernel: Option<String>,
    pub machine: String,
    pub architecture: String,
    pub cpu_count: Option<usize>,
    pub total_ram: Option<String>,
    pub filesystem: Option<String>,
}

pub fn detect() -> HostInfo {
    let mut sys = System::new();
    sys.refresh_memory();

    let total_ram = match sys.total_memory() {
        0 => None,
        bytes => Some(format_ram(bytes)),
    };

    HostInfo {
        os: System::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_string()),
        kernel: System::kernel_version(),
        machine: std::env::consts::ARCH.to_string(),
        architecture: format!("{}bit", usize::BITS),
        cpu_count: std::thread::available_parallelism().ok().map(|n| n.get()),
        total_ram,
        filesystem: filesystem_type(),
    }
}

/// Host toolchain banner, e.g. `rustc 1.80.0 (051478957 2024-07-21)`.
pub fn rust_runtime() -> Option<String> {
    let output = Command::new("rustc")
        .arg("-V")
        .stdin(Stdio::null())
        .output()
        .ok()?;
    let banner = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!banner.is_empty()).then_some(banner)
}

fn format_ram(bytes: u64) -> String {
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
    format!("{:.1} GiB", bytes as f64 / GIB)
}

/// Filesystem type of the disk holding the working directory, picked by the
/// deepest mount point that is a prefix of it.
fn filesystem_type() -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    let disks = Disks::new_with_refreshed_list();
    let mut best: Option<(usize, String)> = None;
    for disk in disks.list() {
        let mount = disk.mount_point();
        if !cwd.starts_with(mount) {
            continue;
        }
        let depth = mount.components().count();
        if best.as_ref().map_or(true, |(d, _)| depth >= *d) {
            best = Some((depth, disk.file_system().to_string_lossy().into_owned()));
        }
    }
    best.map(|(_, fs)| fs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_always_has_os_and_machine() {
        let host = detect();
        assert!(!host.os.is_empty());
        assert!(!host.machine.is_empty());
        assert!(host.architecture.ends_with("bit"));
    }

    #[test]
    fn ram_formats_in_gib() {
        assert_eq!(format_ram(8 * 1024 * 1024 * 1024), "8.0 GiB");
        assert_eq!(format_ram(16_512_345_678), "15.4 GiB");
    }
}
