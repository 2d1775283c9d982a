//! Configuration management
//!
//! Handles loading and managing configuration from
//! ~/.neon-gestures/config.toml with default config generation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = ".neon-gestures";
/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// General configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Classifier polling period in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Fixed shuffle seed for the theme order; omit for a fresh order
    /// each launch
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_poll_interval() -> u64 {
    140
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            shuffle_seed: None,
        }
    }
}

/// Classifier service configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Endpoint receiving frame POSTs
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// JPEG quality for encoded frames, 1-100
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/predict".to_string()
}

fn default_jpeg_quality() -> u8 {
    85
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// Frame capture configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture width in pixels
    #[serde(default = "default_capture_width")]
    pub width: u32,

    /// Capture height in pixels
    #[serde(default = "default_capture_height")]
    pub height: u32,
}

fn default_capture_width() -> u32 {
    640
}

fn default_capture_height() -> u32 {
    360
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: default_capture_width(),
            height: default_capture_height(),
        }
    }
}

/// Window configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial window width in pixels
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// Initial window height in pixels
    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_title() -> String {
    "Neon Gestures".to_string()
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Classifier service settings
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Frame capture settings
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            log::info!("Config file not found, creating default at {:?}", config_path);
            Self::create_default_config()?;
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(config_path.clone(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(config_path.clone(), e))?;

        log::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

        Ok(config)
    }

    /// Get the configuration directory path (~/.neon-gestures/)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file path (~/.neon-gestures/config.toml)
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the default configuration file and directory structure
    pub fn create_default_config() -> Result<(), ConfigError> {
        let config_dir = Self::config_dir()?;
        let config_path = Self::config_file_path()?;

        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::CreateDirError(config_dir.clone(), e))?;

        let default_config = Config::default();
        let toml_content = toml::to_string_pretty(&default_config)
            .map_err(ConfigError::SerializeError)?;

        let content = format!(
            "# Neon Gestures Configuration\n\
             #\n\
             # The classifier endpoint must accept POST {{\"image\": <data URL>}}\n\
             # and answer {{\"label\", \"score\"}} or {{\"error\"}}.\n\
             \n\
             {toml_content}"
        );

        fs::write(&config_path, content)
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e))?;

        log::info!("Created default configuration at {:?}", config_path);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Home directory not found
    NoHomeDirectory,
    /// Failed to read config file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config file
    ParseError(PathBuf, toml::de::Error),
    /// Failed to serialize config
    SerializeError(toml::ser::Error),
    /// Failed to write config file
    WriteError(PathBuf, std::io::Error),
    /// Failed to create directory
    CreateDirError(PathBuf, std::io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::WriteError(path, e) => write!(f, "Failed to write {:?}: {}", path, e),
            ConfigError::CreateDirError(path, e) => write!(f, "Failed to create {:?}: {}", path, e),
        }
    }
}

impl std::error::Error for ConfigError {}
