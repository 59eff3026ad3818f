//! Quiz configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::session::DEFAULT_MAX_REGENERATIONS;

/// Top-level mathquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Draws per new equation before the session reports an exhausted pool.
    #[serde(default = "default_max_regenerations")]
    pub max_regenerations: u32,
    /// Level to start at without asking.
    #[serde(default)]
    pub default_level: Option<u8>,
    /// Replies picked at random when the level prompt gets bad input.
    #[serde(default = "default_level_failed_responses")]
    pub level_failed_responses: Vec<String>,
}

fn default_max_regenerations() -> u32 {
    DEFAULT_MAX_REGENERATIONS
}

fn default_level_failed_responses() -> Vec<String> {
    [
        "I said, choose a number between 1 and 5!",
        "Come on, its a simple task, pick a number between 1 and 5",
        "I've got things to do here, 1-5, now!",
        "Whats your problem?  pick 1,2,3,4, or 5",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_regenerations: default_max_regenerations(),
            default_level: None,
            level_failed_responses: default_level_failed_responses(),
        }
    }
}

impl QuizConfig {
    /// The configured starting level, validated.
    pub fn default_level(&self) -> Result<Option<Level>> {
        self.default_level
            .map(Level::new)
            .transpose()
            .context("invalid default_level in config")
    }

    fn validate(&mut self) -> Result<()> {
        anyhow::ensure!(
            self.max_regenerations >= 1,
            "max_regenerations must be at least 1"
        );
        self.default_level()?;
        if self.level_failed_responses.is_empty() {
            self.level_failed_responses = default_level_failed_responses();
        }
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `mathquiz.toml` in the current directory
/// 2. `~/.config/mathquiz/config.toml`
///
/// Environment variable override: `MATHQUIZ_MAX_REGENERATIONS`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(value) = std::env::var("MATHQUIZ_MAX_REGENERATIONS") {
        config.max_regenerations = value
            .trim()
            .parse()
            .with_context(|| format!("invalid MATHQUIZ_MAX_REGENERATIONS: '{value}'"))?;
    }

    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathquiz"))
}
