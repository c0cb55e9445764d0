use std::process;

use clap::Parser;
use taskboard_cli::cli::Cli;
use taskboard_cli::commands;
use taskboard_cli::error::handle_cli_result;
use taskboard_cli::logging::configure_logging;
use taskboard_cli::render;
use taskboard_config::BoardConfig;

/// Load configuration for CLI usage with graceful error handling
///
/// A broken config file should not lock the user out of their board, so
/// failures are reported and the defaults are used instead.
fn load_cli_configuration() -> BoardConfig {
    match taskboard_config::load_config() {
        Ok(config) => {
            tracing::debug!(?config, "loaded configuration");
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration: {}", e);
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            BoardConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    configure_logging(cli.verbose, cli.debug, cli.quiet);
    render::init_color();

    let config = load_cli_configuration();
    let exit_code = handle_cli_result(commands::run(&cli, &config));
    process::exit(exit_code);
}
