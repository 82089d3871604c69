//! devstrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devstrap::cli::{Cli, CommandDispatcher};
use devstrap::config::Settings;
use devstrap::shell::is_ci;
use devstrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devstrap=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("devstrap starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve settings: config file, then env, then CLI flags
    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    if cli.verbose {
        settings.verbose = true;
    }
    if cli.yes {
        settings.yes = true;
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if settings.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Prompts are pointless without a user: CI and --yes both force
    // the non-interactive UI.
    let is_interactive = !settings.yes && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let dispatcher = CommandDispatcher::new(settings);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
