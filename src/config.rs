use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::DirectionMode;
use crate::quiz::run::QuizOptions;
use crate::quiz::vocabulary::MONTHS;

/// Upper bound on wrong choices: with the answer that is nine, one per digit key.
pub const MAX_DISTRACTORS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_distractor_count")]
    pub distractor_count: usize,
    #[serde(default)]
    pub direction: DirectionMode,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_question_count() -> usize {
    MONTHS.len()
}
fn default_distractor_count() -> usize {
    3
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            distractor_count: default_distractor_count(),
            direction: DirectionMode::default(),
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dalquiz")
            .join("config.toml")
    }

    /// Clamp counts into what the month table can serve.
    pub fn normalize(&mut self) {
        let months = MONTHS.len();
        self.question_count = self.question_count.clamp(1, months);
        self.distractor_count = self
            .distractor_count
            .clamp(1, MAX_DISTRACTORS.min(months - 1));
    }

    pub fn quiz_options(&self) -> QuizOptions {
        QuizOptions {
            question_count: self.question_count,
            distractor_count: self.distractor_count,
            direction_mode: self.direction,
        }
    }
}
