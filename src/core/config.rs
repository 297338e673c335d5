//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "lingua-ar";

/// Get (and create) the application configuration directory
fn app_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    let app_config_dir = config_dir.join(APP_DIR);

    if !app_config_dir.exists() {
        fs::create_dir_all(&app_config_dir)?;
    }

    Ok(app_config_dir)
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.toml"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.speech.speech_rate = config.speech.speech_rate.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Object detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum confidence for a categorization to be displayed
    #[serde(default = "default_probability_threshold")]
    pub probability_threshold: f32,
    /// Frames closer together than this are dropped
    #[serde(default = "default_min_time_between_updates")]
    pub min_time_between_updates_ms: u64,
    /// Freeze detection while an object is focused
    #[serde(default = "default_true")]
    pub pause_on_focus: bool,
}

fn default_probability_threshold() -> f32 { 0.6 }
fn default_min_time_between_updates() -> u64 { 150 }
fn default_true() -> bool { true }

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            probability_threshold: default_probability_threshold(),
            min_time_between_updates_ms: default_min_time_between_updates(),
            pause_on_focus: true,
        }
    }
}

/// Text-to-speech settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speak the translation as soon as an object is focused
    #[serde(default)]
    pub auto_play_on_focus: bool,
    /// 0.0 (slow) to 1.0 (fast)
    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,
}

fn default_speech_rate() -> f32 { 0.5 }

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            auto_play_on_focus: false,
            speech_rate: default_speech_rate(),
        }
    }
}

/// Translation source settings
///
/// The offline table always wins when enabled; the remote provider is only
/// consulted when offline translation is turned off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_true")]
    pub offline_enabled: bool,
    /// Legacy network fallback
    #[serde(default)]
    pub remote_enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String { "https://api-free.deepl.com/v2/translate".to_string() }

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            offline_enabled: true,
            remote_enabled: false,
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

/// Action menu placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default = "default_offset_y")]
    pub offset_y: f32,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f32,
    #[serde(default = "default_panel_width")]
    pub panel_width: f32,
    #[serde(default = "default_panel_height")]
    pub panel_height: f32,
}

fn default_offset_y() -> f32 { -120.0 }
fn default_canvas_width() -> f32 { 1080.0 }
fn default_canvas_height() -> f32 { 1920.0 }
fn default_panel_width() -> f32 { 600.0 }
fn default_panel_height() -> f32 { 300.0 }

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: default_offset_y(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            panel_width: default_panel_width(),
            panel_height: default_panel_height(),
        }
    }
}

/// Integer key-value preference storage
pub trait PreferenceStore {
    fn get_int(&self, key: &str) -> Option<i64>;

    fn set_int(&mut self, key: &str, value: i64) -> Result<()>;

    fn has_key(&self, key: &str) -> bool {
        self.get_int(key).is_some()
    }
}

/// Preferences kept only for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, i64>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Preferences persisted to a TOML file, written through on every change
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl FilePreferenceStore {
    /// Open the store in the application config directory
    pub fn open() -> Result<Self> {
        Self::at(app_config_dir()?.join("preferences.toml"))
    }

    /// Open a store backed by a specific file
    pub fn at(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse preferences: {}", e)))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
