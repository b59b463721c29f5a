//! Unified path management for Belief Unlocked files.
//!
//! Configuration lives under the platform config directory and session data
//! under the platform data directory, both in a `belief-unlocked` subfolder.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/belief-unlocked/       # Config directory
//! └── config.toml                  # Application configuration
//!
//! ~/.local/share/belief-unlocked/  # Data directory
//! └── sessions.json                # Completed session records
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "belief-unlocked";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Belief Unlocked.
pub struct BeliefPaths;

impl BeliefPaths {
    /// Returns the configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/belief-unlocked/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory used for session records.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/belief-unlocked/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the session store file.
    pub fn sessions_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("sessions.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = BeliefPaths::config_dir().unwrap();
        assert!(config_dir.ends_with(APP_DIR));
    }

    #[test]
    fn test_config_file() {
        let config_file = BeliefPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = BeliefPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_sessions_file() {
        let sessions_file = BeliefPaths::sessions_file().unwrap();
        assert!(sessions_file.ends_with("sessions.json"));
        let data_dir = BeliefPaths::data_dir().unwrap();
        assert!(sessions_file.starts_with(&data_dir));
    }
}
