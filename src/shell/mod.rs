//! Shell command execution.
//!
//! # Modules
//!
//! - [`command`] - Blocking shell-out primitives

pub mod command;

pub use command::{execute, CommandOptions, CommandResult};

/// Check if running in a CI environment.
///
/// Used to force non-interactive behavior and suppress prompts. Checks
/// common CI environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`,
/// `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
