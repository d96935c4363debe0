//! depend-on-all CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use depend_on_all::cli::{Cli, CommandDispatcher, EXIT_CONFIG_ERROR};
use depend_on_all::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("depend_on_all=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depend_on_all=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("depend-on-all starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let mut ui = create_ui(output_mode, cli.no_color);

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(project_root).with_reactor(cli.reactor.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_CONFIG_ERROR as u8)
        }
    }
}
