//! Platform classification and environment probing.
//!
//! This module answers two questions the rest of the CLI depends on:
//! which of the supported operating-system families we are running on,
//! and whether the process holds elevated privileges.
//!
//! # Modules
//!
//! - [`detect`] - OS family detection and version/arch metadata

pub mod detect;

pub use detect::{detect, os_info, PlatformInfo};

use std::fmt;

/// A supported operating-system family.
///
/// Immutable once detected for a process invocation. Every downstream
/// component (catalog probes, procedure lookup, orchestration) consumes
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Ubuntu and other Debian-family distributions (apt-get).
    Ubuntu,
    /// CentOS/RHEL-family distributions (yum or dnf).
    CentOs,
    /// macOS (Homebrew).
    MacOs,
}

impl Platform {
    /// All supported platforms, in documentation order.
    pub const ALL: [Platform; 3] = [Platform::Ubuntu, Platform::CentOs, Platform::MacOs];

    /// Stable identifier used in error messages and procedure lookup.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Ubuntu => "ubuntu",
            Platform::CentOs => "centos",
            Platform::MacOs => "macos",
        }
    }

    /// Human-readable label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ubuntu => "Ubuntu/Debian",
            Platform::CentOs => "CentOS/RHEL",
            Platform::MacOs => "macOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_ids_are_stable() {
        assert_eq!(Platform::Ubuntu.id(), "ubuntu");
        assert_eq!(Platform::CentOs.id(), "centos");
        assert_eq!(Platform::MacOs.id(), "macos");
    }

    #[test]
    fn platform_display_matches_id() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string(), platform.id());
        }
    }

    #[test]
    fn platform_labels_name_the_family() {
        assert!(Platform::Ubuntu.label().contains("Ubuntu"));
        assert!(Platform::CentOs.label().contains("RHEL"));
        assert!(Platform::MacOs.label().contains("macOS"));
    }

    #[test]
    fn is_elevated_does_not_panic() {
        let _ = is_elevated();
    }
}
