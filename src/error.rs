//! Error types for devstrap operations.
//!
//! This module defines [`DevstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DevstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DevstrapError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for devstrap operations.
#[derive(Debug, Error)]
pub enum DevstrapError {
    /// The running kernel/distribution does not match any supported platform.
    #[error("Unsupported platform: {message}")]
    UnsupportedPlatform { message: String },

    /// Tool identifier is not in the catalog.
    #[error("Unrecognized tool: {tool}")]
    UnrecognizedTool { tool: String },

    /// Invoked with superuser privileges, which is explicitly disallowed.
    #[error("This command must not be run as root")]
    PrivilegeViolation,

    /// A required bootstrap dependency is missing (e.g., Homebrew on macOS).
    #[error("Missing prerequisite '{prerequisite}': {message}")]
    UnmetPrerequisite {
        prerequisite: String,
        message: String,
    },

    /// An installation step exited non-zero.
    #[error("Step '{step}' failed with exit code {code:?}")]
    StepFailed { step: String, code: Option<i32> },

    /// No installation procedure exists for this (tool, platform) pair.
    #[error("No installation procedure for {tool} on {platform}")]
    UnsupportedCombination { tool: String, platform: String },

    /// Failed to read or parse the configuration file.
    #[error("Failed to load config at {path}: {message}")]
    ConfigError { path: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devstrap operations.
pub type Result<T> = std::result::Result<T, DevstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_displays_message() {
        let err = DevstrapError::UnsupportedPlatform {
            message: "no known package manager found".into(),
        };
        assert!(err.to_string().contains("no known package manager"));
    }

    #[test]
    fn unrecognized_tool_displays_name() {
        let err = DevstrapError::UnrecognizedTool {
            tool: "frobnicator".into(),
        };
        assert!(err.to_string().contains("frobnicator"));
    }

    #[test]
    fn privilege_violation_mentions_root() {
        let err = DevstrapError::PrivilegeViolation;
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn unmet_prerequisite_displays_name_and_message() {
        let err = DevstrapError::UnmetPrerequisite {
            prerequisite: "brew".into(),
            message: "Install Homebrew first: https://brew.sh".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew"));
        assert!(msg.contains("https://brew.sh"));
    }

    #[test]
    fn step_failed_displays_step_and_code() {
        let err = DevstrapError::StepFailed {
            step: "Update apt package index".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("Update apt package index"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn unsupported_combination_displays_tool_and_platform() {
        let err = DevstrapError::UnsupportedCombination {
            tool: "docker".into(),
            platform: "macos".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker"));
        assert!(msg.contains("macos"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DevstrapError = io_err.into();
        assert!(matches!(err, DevstrapError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DevstrapError::PrivilegeViolation)
        }
        assert!(returns_error().is_err());
    }
}
