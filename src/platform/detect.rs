//! OS family detection.
//!
//! Darwin kernels classify as macOS directly. Linux kernels are classified
//! by probing for distribution package managers on PATH in a fixed priority
//! order: the Debian-family manager first, then the RHEL-family managers.
//! A host with both apt-get and yum installed therefore resolves to
//! [`Platform::Ubuntu`]; the ordering is policy, not derived from
//! `/etc/os-release`.

use std::process::Command;

use crate::error::{DevstrapError, Result};
use crate::platform::Platform;

/// Linux package managers probed during detection, in priority order.
const LINUX_MANAGERS: [(&str, Platform); 3] = [
    ("apt-get", Platform::Ubuntu),
    ("yum", Platform::CentOs),
    ("dnf", Platform::CentOs),
];

/// Detect the current platform.
///
/// Fails with [`DevstrapError::UnsupportedPlatform`] when the running
/// environment matches no supported family. Deterministic for a fixed
/// environment; the probe is cheap, so the result is never cached.
pub fn detect() -> Result<Platform> {
    if cfg!(target_os = "macos") {
        return Ok(Platform::MacOs);
    }

    if cfg!(target_os = "linux") {
        return classify_linux(|binary| which::which(binary).is_ok());
    }

    Err(DevstrapError::UnsupportedPlatform {
        message: format!("{} is not supported", std::env::consts::OS),
    })
}

/// Classify a Linux host by package-manager availability.
///
/// Takes the "binary present on PATH" predicate as a parameter so the
/// priority-order behavior is testable without touching the host.
pub fn classify_linux(available: impl Fn(&str) -> bool) -> Result<Platform> {
    for (manager, platform) in LINUX_MANAGERS {
        if available(manager) {
            tracing::debug!("classified Linux host as {platform} via {manager}");
            return Ok(platform);
        }
    }

    Err(DevstrapError::UnsupportedPlatform {
        message: "unsupported Linux distribution: no known package manager found".into(),
    })
}

/// Platform metadata for status output.
#[derive(Debug, Clone)]
pub struct PlatformInfo {
    /// Detected OS family.
    pub platform: Platform,

    /// Processor architecture (e.g. `x86_64`, `aarch64`).
    pub arch: &'static str,

    /// OS version string, when the platform exposes one.
    pub version: Option<String>,
}

/// Gather platform metadata.
///
/// Version lookup is best-effort: a missing `lsb_release` or unreadable
/// release file degrades to `None` rather than failing the command.
pub fn os_info() -> Result<PlatformInfo> {
    let platform = detect()?;

    Ok(PlatformInfo {
        platform,
        arch: std::env::consts::ARCH,
        version: os_version(platform),
    })
}

fn os_version(platform: Platform) -> Option<String> {
    match platform {
        Platform::Ubuntu => command_stdout("lsb_release", &["-r", "-s"]),
        Platform::CentOs => std::fs::read_to_string("/etc/redhat-release")
            .ok()
            .map(|s| s.trim().to_string()),
        Platform::MacOs => command_stdout("sw_vers", &["-productVersion"]),
    }
    .filter(|v| !v.is_empty())
}

fn command_stdout(command: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(command).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_debian_family_when_both_present() {
        // A host with stray yum binaries next to apt-get must resolve to
        // the first-checked family.
        let platform = classify_linux(|_| true).unwrap();
        assert_eq!(platform, Platform::Ubuntu);
    }

    #[test]
    fn classify_falls_back_to_yum() {
        let platform = classify_linux(|binary| binary == "yum").unwrap();
        assert_eq!(platform, Platform::CentOs);
    }

    #[test]
    fn classify_accepts_dnf_only_hosts() {
        let platform = classify_linux(|binary| binary == "dnf").unwrap();
        assert_eq!(platform, Platform::CentOs);
    }

    #[test]
    fn classify_fails_without_known_manager() {
        let err = classify_linux(|_| false).unwrap_err();
        assert!(matches!(
            err,
            DevstrapError::UnsupportedPlatform { .. }
        ));
    }

    #[test]
    fn classify_is_deterministic() {
        let first = classify_linux(|binary| binary == "apt-get").unwrap();
        let second = classify_linux(|binary| binary == "apt-get").unwrap();
        assert_eq!(first, second);
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn detect_is_deterministic_within_a_process() {
        let first = detect();
        let second = detect();
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => panic!("detection flapped between calls"),
        }
    }

    #[test]
    fn command_stdout_handles_missing_binary() {
        assert_eq!(command_stdout("devstrap-no-such-binary", &[]), None);
    }
}
