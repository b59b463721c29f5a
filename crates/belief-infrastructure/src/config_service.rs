//! Application configuration loading.
//!
//! The config file is optional; every field has a default so a fresh
//! install works without any setup. A missing file or missing keys degrade
//! to defaults, and only an unreadable or unparsable file is reported as an
//! error.

use crate::paths::BeliefPaths;
use belief_core::session::DEFAULT_USER_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of suggestions shown per question.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;

/// User-tunable application settings from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Identifier recorded on completed sessions
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Maximum suggestions shown per question
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Overrides the platform data directory for the session store
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            suggestion_limit: default_suggestion_limit(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the default location.
    ///
    /// # Returns
    ///
    /// - `Ok(AppConfig)`: Parsed config, or defaults when the file or the
    ///   config directory does not exist
    /// - `Err(String)`: The file exists but cannot be read or parsed
    pub fn load() -> Result<Self, String> {
        match BeliefPaths::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file at {:?}: {}", path, e))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse TOML from {:?}: {}", path, e))
    }

    /// The session store location, honoring the `data_dir` override.
    pub fn sessions_file(&self) -> Result<PathBuf, String> {
        match &self.data_dir {
            Some(dir) => Ok(dir.join("sessions.json")),
            None => BeliefPaths::sessions_file().map_err(|e| e.to_string()),
        }
    }
}
