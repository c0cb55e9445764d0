//! The board configuration and its default values

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage key used when nothing else is configured
pub const DEFAULT_STORAGE_KEY: &str = "Task-Board-Standalone";

/// Directory name used for both the config files and the fallback storage
pub const CONFIG_DIR_NAME: &str = ".taskboard";

/// Settings for a board front end.
///
/// Every field has a default, so an empty configuration is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding the board blob; platform data dir when unset
    pub storage_dir: Option<PathBuf>,
    /// Key the board is stored under
    pub storage_key: String,
    /// Name stamped on activity entries
    pub actor: Option<String>,
    /// Color given to new tasks when none is chosen
    pub default_color: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            actor: None,
            default_color: "default".to_string(),
        }
    }
}

impl BoardConfig {
    /// Where the board lives: the configured directory, else
    /// `<data dir>/taskboard`, else `./.taskboard`
    pub fn resolved_storage_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .map(|dir| dir.join("taskboard"))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
    }

    /// Override the storage directory (e.g. from a command line flag)
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_key, "Task-Board-Standalone");
        assert_eq!(config.default_color, "default");
        assert!(config.actor.is_none());
    }

    #[test]
    fn test_explicit_storage_dir_wins() {
        let config = BoardConfig::default().with_storage_dir("/tmp/boards");
        assert_eq!(config.resolved_storage_dir(), PathBuf::from("/tmp/boards"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"actor": "sam"}"#).unwrap();
        assert_eq!(config.actor.as_deref(), Some("sam"));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }
}
