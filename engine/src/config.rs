//! TOML configuration loading.
//!
//! Configuration lives at `~/.darb/config.toml` (overridable through
//! `DARB_CONFIG`). A missing file is not an error; read and parse
//! failures are reported to the caller, which logs and continues on
//! defaults.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use darb_types::UiOptions;

#[derive(Debug, Default, Deserialize)]
pub struct DarbConfig {
    pub app: Option<AppConfig>,
    pub quiz: Option<QuizConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

impl AppConfig {
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.ascii_only,
            high_contrast: self.high_contrast,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    /// Seed value for the score counter.
    pub starting_score: Option<u32>,
    /// Initial table factor, 1-12.
    pub table: Option<u8>,
    /// Initial multiplier factor, 1-12.
    pub multiplier: Option<u8>,
    /// Render numerals with a thousands separator.
    #[serde(default)]
    pub digit_grouping: bool,
}

impl DarbConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var("DARB_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".darb").join("config.toml"))
}
