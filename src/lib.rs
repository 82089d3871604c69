//! devstrap - DevOps tool onboarding automation.
//!
//! devstrap installs a fixed catalog of developer tools (Docker, Git,
//! net-tools, Terraform, AWS CLI, kubectl, watch, Helm, Helmfile, K9s) on
//! Ubuntu, CentOS/RHEL, and macOS by shelling out to the native package
//! managers. Execution is strictly sequential and blocking: one tool at a
//! time, one step at a time.
//!
//! # Modules
//!
//! - [`catalog`] - The fixed tool catalog and availability probes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - User configuration file and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Procedures, dispatch, and batch orchestration
//! - [`platform`] - OS family detection and privilege checks
//! - [`shell`] - Blocking shell command execution
//! - [`ui`] - Terminal output and interactive prompts
//!
//! # Example
//!
//! ```
//! use devstrap::catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! assert!(catalog.contains("docker"));
//! // Unknown identifiers never error at this layer.
//! assert!(!catalog.is_installed("not-a-tool"));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{DevstrapError, Result};
