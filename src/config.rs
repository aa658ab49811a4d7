use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::context::ThemeMode;
use crate::i18n::Language;
use crate::utils;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_cookie_banner_delay_ms")]
    pub cookie_banner_delay_ms: u64,
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default)]
    pub links: Links,
    #[serde(default = "default_config_version")]
    pub config_version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_new_task")]
    pub new_task: String,
    #[serde(default = "default_toggle_language")]
    pub toggle_language: String,
    #[serde(default = "default_toggle_theme")]
    pub toggle_theme: String,
    #[serde(default = "default_select")]
    pub select: String,
    #[serde(default = "default_toggle_done")]
    pub toggle_done: String,
}

/// External navigation targets opened by call-to-action buttons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    #[serde(default = "default_telegram_link")]
    pub telegram: String,
    #[serde(default = "default_project_link")]
    pub project: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: ThemeMode::default(),
            user_name: default_user_name(),
            cookie_banner_delay_ms: default_cookie_banner_delay_ms(),
            store_path: default_store_path(),
            key_bindings: KeyBindings::default(),
            links: Links::default(),
            config_version: Some(CURRENT_CONFIG_VERSION),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: default_quit(),
            new_task: default_new_task(),
            toggle_language: default_toggle_language(),
            toggle_theme: default_toggle_theme(),
            select: default_select(),
            toggle_done: default_toggle_done(),
        }
    }
}

impl Default for Links {
    fn default() -> Self {
        Self {
            telegram: default_telegram_link(),
            project: default_project_link(),
        }
    }
}

// Default value functions
fn default_user_name() -> String {
    "Alex".to_string()
}

fn default_cookie_banner_delay_ms() -> u64 {
    2000
}

fn default_store_path() -> String {
    // Fallback only; the profile-specific path is applied at load time
    if let Some(data_dir) = utils::get_data_dir(utils::Profile::Prod) {
        data_dir.join("saturway.db").to_string_lossy().to_string()
    } else {
        "~/.local/share/saturway/saturway.db".to_string()
    }
}

fn default_quit() -> String {
    "q".to_string()
}

fn default_new_task() -> String {
    "n".to_string()
}

fn default_toggle_language() -> String {
    "l".to_string()
}

fn default_toggle_theme() -> String {
    "t".to_string()
}

fn default_select() -> String {
    "Enter".to_string()
}

fn default_toggle_done() -> String {
    "Space".to_string()
}

fn default_telegram_link() -> String {
    "https://t.me/your_bot_name".to_string()
}

fn default_project_link() -> String {
    "https://saturway.space/".to_string()
}

fn default_config_version() -> Option<u32> {
    Some(CURRENT_CONFIG_VERSION)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

impl Config {
    /// Load configuration from the profile's config file, creating it with
    /// defaults when missing
    pub fn load_with_profile(profile: utils::Profile) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(profile)?;
        let mut config = Self::load_from_path(&config_path)?;
        config.store_path = Self::default_store_path_for_profile(profile);
        Ok(config)
    }

    /// Load configuration from an explicit file, creating it with defaults when missing
    pub fn load_from_path(config_path: &Path) -> Result<Self, ConfigError> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            let mut config = Config::default();
            if let Err(e) = config.save_to_path(config_path) {
                tracing::error!("Failed to save config file {:?}: {}", config_path, e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Save configuration to an explicit file
    pub fn save_to_path(&mut self, config_path: &Path) -> Result<(), ConfigError> {
        self.config_version = Some(CURRENT_CONFIG_VERSION);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, toml_string).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile).ok_or_else(|| {
            ConfigError::ConfigDirError("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("config.toml"))
    }

    fn default_store_path_for_profile(profile: utils::Profile) -> String {
        if let Some(data_dir) = utils::get_data_dir(profile) {
            data_dir.join("saturway.db").to_string_lossy().to_string()
        } else {
            match profile {
                utils::Profile::Dev => "~/.local/share/saturway-dev/saturway.db".to_string(),
                utils::Profile::Prod => "~/.local/share/saturway/saturway.db".to_string(),
            }
        }
    }

    /// Get the expanded key-value store path (with ~ expansion)
    pub fn get_store_path(&self) -> PathBuf {
        utils::expand_path(&self.store_path)
    }

    /// Log file sits next to the key-value store
    pub fn get_log_path(&self) -> PathBuf {
        let store = self.get_store_path();
        store
            .parent()
            .map(|dir| dir.join("saturway.log"))
            .unwrap_or_else(|| PathBuf::from("saturway.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("language = \"en\"\n").unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.cookie_banner_delay_ms, 2000);
        assert_eq!(config.key_bindings.quit, "q");
        assert_eq!(config.links.project, "https://saturway.space/");
    }

    #[test]
    fn creates_file_on_first_load_and_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::load_from_path(&path).unwrap();
        assert!(path.exists());

        config.theme = ThemeMode::Light;
        config.user_name = "Maria".to_string();
        config.save_to_path(&path).unwrap();

        let reloaded = Config::load_from_path(&path).unwrap();
        assert_eq!(reloaded.theme, ThemeMode::Light);
        assert_eq!(reloaded.user_name, "Maria");
        assert_eq!(reloaded.config_version, Some(CURRENT_CONFIG_VERSION));
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = [").unwrap();
        assert!(matches!(
            Config::load_from_path(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
