//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global `~/.taskboard/`
//! directory and the project `./.taskboard/` directory.

use crate::defaults::CONFIG_DIR_NAME;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Accepted configuration file names, in load order within one directory
const CONFIG_FILE_NAMES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// Represents a discovered configuration file with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file (TOML, YAML, JSON)
    pub format: ConfigFormat,
    /// Scope indicating where the file was found (global vs project)
    pub scope: ConfigScope,
}

impl ConfigFile {
    pub fn new(path: PathBuf, format: ConfigFormat, scope: ConfigScope) -> Self {
        Self {
            path,
            format,
            scope,
        }
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a configuration file was discovered.
///
/// Ordered by precedence: later scopes override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// `~/.taskboard/`
    Global,
    /// `./.taskboard/`
    Project,
}

/// File discovery service for finding configuration files
#[derive(Debug, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Directories are resolved at discovery time, not here
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit directories instead of the home and current directories
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let project_dir = self.project_dir.clone().or_else(Self::resolve_project_dir);
        let global_dir = self.global_dir.clone().or_else(Self::resolve_global_dir);

        let mut files = Vec::new();
        if let Some(dir) = &global_dir {
            files.extend(self.search_directory(dir, ConfigScope::Global));
        }
        if let Some(dir) = &project_dir {
            files.extend(self.search_directory(dir, ConfigScope::Project));
        }

        // Stable sort keeps the per-directory file order
        files.sort_by_key(|f| f.scope);

        debug!("Discovered {} configuration files", files.len());
        for file in &files {
            trace!("Found config: {} ({:?})", file.path.display(), file.format);
        }
        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            debug!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| Self::classify_file(&candidate, scope))
            .collect()
    }

    fn classify_file(path: &Path, scope: ConfigScope) -> Option<ConfigFile> {
        let extension = path.extension()?.to_str()?;
        let format = ConfigFormat::from_extension(extension)?;
        Some(ConfigFile::new(path.to_path_buf(), format, scope))
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}
