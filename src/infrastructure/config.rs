use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_OUTPUT_EXTENSION};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// TOML configuration for org2anki
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub append: bool,
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct NotesConfig {
    /// Emit the last note of a file instead of dropping it
    #[serde(default)]
    pub keep_trailing_note: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct FormatConfig {
    #[serde(default)]
    pub escape_html: bool,
}

fn default_extension() -> String { DEFAULT_OUTPUT_EXTENSION.to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            append: false,
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load `explicit` if given, else the per-user config file if one exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/org2anki/config.toml` for the current user, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
