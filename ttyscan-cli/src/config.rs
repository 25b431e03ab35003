//! Configuration file support for ttyscan.
//!
//! Configuration is loaded from multiple sources with the following priority (highest first):
//! 1. Command-line arguments
//! 2. Environment variables (TTYSCAN_*)
//! 3. Local config file (./ttyscan.toml)
//! 4. Global config file (~/.config/ttyscan/config.toml)

use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use ttyscan::SysfsLayout;

/// Local configuration file name.
const LOCAL_CONFIG_FILE: &str = "ttyscan.toml";

/// Scan root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory holding device nodes (default "/dev").
    pub dev_dir: Option<String>,
    /// Mount point of sysfs (default "/sys").
    pub sysfs_dir: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scan configuration.
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from all available sources.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global_config) = Self::load_from_file(&global_path) {
                debug!("Loaded global config from {}", global_path.display());
                config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        if let Some(local_config) = Self::load_from_file(Path::new(LOCAL_CONFIG_FILE)) {
            debug!("Loaded local config from {LOCAL_CONFIG_FILE}");
            config.merge(local_config);
        }

        config
    }

    /// Load configuration from a specific file path (--config flag).
    pub fn load_from_path(path: &Path) -> Self {
        if let Some(config) = Self::load_from_file(path) {
            debug!("Loaded config from {}", path.display());
            config
        } else {
            warn!(
                "Could not load config from {}, using defaults",
                path.display()
            );
            Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("Failed to parse config file {}: {}", path.display(), e);
                    None
                },
            },
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                None
            },
        }
    }

    /// Get the global configuration directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ttyscan").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the global configuration file path.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Merge another config into this one.
    fn merge(&mut self, other: Self) {
        if other.scan.dev_dir.is_some() {
            self.scan.dev_dir = other.scan.dev_dir;
        }
        if other.scan.sysfs_dir.is_some() {
            self.scan.sysfs_dir = other.scan.sysfs_dir;
        }
    }

    /// Build the scan layout, letting command-line/environment values win.
    pub fn layout(&self, dev_dir: Option<&str>, sysfs_dir: Option<&str>) -> SysfsLayout {
        let defaults = SysfsLayout::default();

        let dev_dir = dev_dir
            .or(self.scan.dev_dir.as_deref())
            .unwrap_or(defaults.dev_dir());
        let sysfs_dir = sysfs_dir
            .or(self.scan.sysfs_dir.as_deref())
            .unwrap_or(defaults.sysfs_dir());

        SysfsLayout::new(dev_dir, sysfs_dir)
    }
}
