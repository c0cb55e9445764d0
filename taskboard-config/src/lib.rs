//! Task board configuration using Figment
//!
//! Settings are merged from several sources with a fixed precedence:
//! defaults → global file → project file → environment.
//!
//! # Configuration Files
//!
//! - Global: `~/.taskboard/config.{toml,yaml,yml,json}`
//! - Project: `./.taskboard/config.{toml,yaml,yml,json}`
//!
//! ```toml
//! storage_dir = "/home/sam/.local/share/taskboard"
//! storage_key = "Task-Board-Standalone"
//! actor = "sam"
//! default_color = "c-blue"
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! export TASKBOARD_STORAGE_DIR=/tmp/board   # → storage_dir
//! export TASKBOARD_ACTOR=ci                 # → actor
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! let config = taskboard_config::load_config()?;
//! println!("board stored in {}", config.resolved_storage_dir().display());
//! # Ok::<(), taskboard_config::ConfigError>(())
//! ```

/// The configuration struct and its defaults
pub mod defaults;
/// File discovery logic for configuration files
pub mod discovery;
/// Error types and handling
pub mod error;
/// Figment-backed provider
pub mod provider;

pub use defaults::{BoardConfig, CONFIG_DIR_NAME, DEFAULT_STORAGE_KEY};
pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::{ConfigProvider, ENV_PREFIX};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load the configuration from all sources
pub fn load_config() -> ConfigResult<BoardConfig> {
    ConfigProvider::new().load()
}

#[cfg(test)]
mod tests;
