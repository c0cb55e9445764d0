//! Tracing setup for the CLI

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Level selected by the global flags; `quiet` wins over `debug` wins over `verbose`
pub fn log_level(verbose: bool, debug: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::WARN
    }
}

/// Install the global subscriber; logs always go to stderr so stdout stays
/// parseable with `--format json`.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let level = log_level(verbose, debug, quiet);
    let filter = EnvFilter::try_from_env("TASKBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("figment=warn,{level}")));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_precedence() {
        assert_eq!(log_level(false, false, false), Level::WARN);
        assert_eq!(log_level(true, false, false), Level::TRACE);
        assert_eq!(log_level(true, true, false), Level::DEBUG);
        assert_eq!(log_level(true, true, true), Level::ERROR);
    }
}
