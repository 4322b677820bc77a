use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::lang_tag::{PreferenceList, parse_preferences};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Languages of the reference subtitles, most wanted first (e.g. "en-US")
    #[serde(default = "default_reference_languages")]
    pub reference_languages: Vec<String>,

    /// Language being learned / of the target subtitles
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Extensions of the media files to scan
    #[serde(default = "default_media_extensions")]
    pub media_extensions: Vec<String>,

    /// Extensions of the side-files considered as candidates
    #[serde(default = "default_subtitle_extensions")]
    pub subtitle_extensions: Vec<String>,

    /// Directories with this suffix are not descended into
    #[serde(default = "default_skip_dir_suffix")]
    pub skip_dir_suffix: String,

    /// Only accept dubtitles for the target slot
    #[serde(default)]
    pub dubs_only: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_reference_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_target_language() -> String {
    "ja".to_string()
}

fn default_media_extensions() -> Vec<String> {
    vec!["mp4".to_string(), "mkv".to_string()]
}

fn default_subtitle_extensions() -> Vec<String> {
    ["srt", "ass", "ssa", "vtt"].iter().map(|ext| ext.to_string()).collect()
}

fn default_skip_dir_suffix() -> String {
    ".media".to_string()
}

/// Default location of the configuration file when none is given
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("langpick").join("conf.json"))
        .unwrap_or_else(|| PathBuf::from("conf.json"))
}

impl Config {
    /// Load the configuration from `path`, writing a default one if it doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;

            let reader = BufReader::new(file);
            return serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path));
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_languages.is_empty() {
            return Err(ConfigError::Empty("reference_languages"));
        }
        if self.media_extensions.is_empty() {
            return Err(ConfigError::Empty("media_extensions"));
        }
        if self.subtitle_extensions.is_empty() {
            return Err(ConfigError::Empty("subtitle_extensions"));
        }

        self.reference_preferences()?;
        self.target_preferences()?;

        Ok(())
    }

    /// Ordered preferences for the reference slot
    pub fn reference_preferences(&self) -> Result<PreferenceList, ConfigError> {
        parse_preferences(&self.reference_languages).map_err(|source| ConfigError::Language {
            field: "reference_languages",
            source,
        })
    }

    /// Single-entry preferences for the target slot
    pub fn target_preferences(&self) -> Result<PreferenceList, ConfigError> {
        parse_preferences([self.target_language.trim()]).map_err(|source| ConfigError::Language {
            field: "target_language",
            source,
        })
    }

    /// Whether `path` has one of the media extensions
    pub fn is_media_file(&self, path: &Path) -> bool {
        has_extension(path, &self.media_extensions)
    }

    /// Whether `path` has one of the side-file extensions
    pub fn is_subtitle_file(&self, path: &Path) -> bool {
        has_extension(path, &self.subtitle_extensions)
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(&ext))
        })
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            reference_languages: default_reference_languages(),
            target_language: default_target_language(),
            media_extensions: default_media_extensions(),
            subtitle_extensions: default_subtitle_extensions(),
            skip_dir_suffix: default_skip_dir_suffix(),
            dubs_only: false,
            log_level: LogLevel::default(),
        }
    }
}
