use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StarterKitError;
use crate::format::Locale;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub locale: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: "ko-KR".into(),
        }
    }
}

impl GeneralConfig {
    pub fn locale(&self) -> Result<Locale, StarterKitError> {
        self.locale.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub follow_system: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            follow_system: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "starterkit=info".into(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self, StarterKitError> {
        toml::from_str(content).map_err(|e| StarterKitError::Config(e.to_string()))
    }

    /// Load the config at `path`, or the built-in defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, StarterKitError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AppConfig {
    /// Load the user config file (XDG on Linux, AppData on Windows).
    pub fn load() -> Result<Self, StarterKitError> {
        Self::load_from(&Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory holding the durable theme slot.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.data_dir {
            return dir.clone();
        }
        Self::project_dirs()
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("", "", "starterkit")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.general.locale, "ko-KR");
        assert!(config.appearance.follow_system);
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(config.logging.filter, "starterkit=info");
    }

    #[test]
    fn test_section_defaults_match_file() {
        let config = AppConfig::default();
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.appearance, AppearanceConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::from_toml("[appearance]\nfollow_system = false\n").unwrap();
        assert!(!config.appearance.follow_system);
        assert_eq!(config.general.locale, "ko-KR");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = AppConfig::from_toml("[appearance]\nfollow_system = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, StarterKitError::Config(_)));
    }

    #[test]
    fn test_data_dir_override() {
        let config =
            AppConfig::from_toml("[storage]\ndata_dir = \"/tmp/starterkit-test\"\n").unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/starterkit-test"));
    }

    #[test]
    fn test_load_from_missing_path_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = AppConfig::from_toml(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
