//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// devstrap - DevOps tool onboarding automation.
#[derive(Debug, Parser)]
#[command(name = "devstrap")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.devstrap.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output, including package-manager output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts (also via DEVSTRAP_YES)
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install a single tool from the catalog
    Install(InstallArgs),

    /// Install tool sets, interactively or in batch
    Setup(SetupArgs),

    /// Show installed/missing status for every catalog tool
    Status(StatusArgs),

    /// Show how to upgrade devstrap itself
    Update,

    /// Show version and build metadata
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Tool identifier (e.g., docker, terraform, aws-cli)
    pub tool: String,
}

/// Batch selection for the `setup` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SetupType {
    /// Menu loop: essentials / cloud-devops / all / pick one / exit
    #[default]
    Interactive,
    /// Docker, Git, net-tools
    Essentials,
    /// Terraform, AWS CLI, kubectl, watch, Helm, Helmfile, K9s
    CloudDevops,
    /// Every catalog tool
    All,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Which tool set to install
    #[arg(short = 't', long = "type", value_enum, default_value = "interactive")]
    pub setup_type: SetupType,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
