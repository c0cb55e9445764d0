//! Configuration provider using Figment

use crate::{
    defaults::BoardConfig,
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    error::ConfigError,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Prefix of the environment variables that override file settings
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Configuration provider using figment
///
/// Sources in precedence order, later ones override earlier ones:
/// 1. [`BoardConfig::default`]
/// 2. `~/.taskboard/config.*`
/// 3. `./.taskboard/config.*`
/// 4. `TASKBOARD_*` environment variables
///
/// Nothing is cached; every [`ConfigProvider::load`] reads fresh.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific file discovery (custom directories)
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the board configuration
    pub fn load(&self) -> ConfigResult<BoardConfig> {
        let config: BoardConfig = self.build_figment().extract()?;

        if config.storage_key.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "storage_key",
                "must not be empty",
            ));
        }

        debug!(
            storage_key = %config.storage_key,
            storage_dir = ?config.storage_dir,
            actor = ?config.actor,
            "Loaded board configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(BoardConfig::default()))
            .merge(self.load_discovered_config_files())
            .merge(Self::load_env_vars())
    }

    fn load_discovered_config_files(&self) -> Figment {
        self.discovery
            .discover_all()
            .iter()
            .fold(Figment::new(), |figment, file| {
                trace!(
                    "Loading config file: {} ({:?})",
                    file.path.display(),
                    file.format
                );
                figment.merge(Self::load_config_file(file))
            })
    }

    fn load_config_file(config_file: &ConfigFile) -> Figment {
        let path = &config_file.path;
        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    fn load_env_vars() -> Env {
        Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into())
    }
}
