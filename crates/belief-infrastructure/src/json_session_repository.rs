//! File-backed SessionRepository implementation.
//!
//! The whole session list lives in a single JSON file, read in full and
//! rewritten in full on every append. This mirrors the single-key layout of
//! the store it replaces: an ordered array of session records under one
//! name.

use async_trait::async_trait;
use belief_core::error::{BeliefError, Result};
use belief_core::session::{SessionData, SessionRepository};
use std::path::{Path, PathBuf};
use tokio::fs;

/// JSON-file session repository.
///
/// Read failures are treated defensively: a missing or corrupt file reads as
/// an empty list (with a warning for corruption) so a damaged store never
/// takes the review views down with it.
pub struct JsonSessionRepository {
    path: PathBuf,
}

impl JsonSessionRepository {
    /// Creates a repository backed by the given file path.
    ///
    /// The file and its parent directory are created lazily on first append.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full session list, oldest first (append order).
    async fn read_all(&self) -> Result<Vec<SessionData>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            BeliefError::io(format!(
                "Failed to read session store {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt session store, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Rewrites the full session list.
    async fn write_all(&self, sessions: &[SessionData]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                BeliefError::io(format!(
                    "Failed to create session store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(sessions)?;
        fs::write(&self.path, content).await.map_err(|e| {
            BeliefError::io(format!(
                "Failed to write session store {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn append(&self, session: &SessionData) -> Result<()> {
        let mut sessions = self.read_all().await?;
        sessions.push(session.clone());
        self.write_all(&sessions).await
    }

    async fn find_by_id(&self, session_id: &str) -> Result<Option<SessionData>> {
        let sessions = self.read_all().await?;
        Ok(sessions.into_iter().find(|s| s.id == session_id))
    }

    async fn list_all(&self) -> Result<Vec<SessionData>> {
        let mut sessions = self.read_all().await?;
        // Newest first for the history view.
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belief_core::answer::AnswerSet;
    use belief_core::session::DEFAULT_USER_ID;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn test_session(minute: u32) -> SessionData {
        let mut answers = AnswerSet::new();
        answers.insert(1, format!("Difficulty at minute {}", minute));
        answers.insert(9, 6u8);
        let completed_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap();
        SessionData::with_timestamp(DEFAULT_USER_ID, answers, completed_at)
    }

    fn repository(dir: &TempDir) -> JsonSessionRepository {
        JsonSessionRepository::new(dir.path().join("sessions.json"))
    }

    #[tokio::test]
    async fn append_and_find_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let session = test_session(0);
        repo.append(&session).await.unwrap();

        let loaded = repo.find_by_id(&session.id).await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn append_preserves_existing_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.append(&test_session(0)).await.unwrap();
        repo.append(&test_session(1)).await.unwrap();
        repo.append(&test_session(2)).await.unwrap();

        let sessions = repo.list_all().await.unwrap();
        assert_eq!(sessions.len(), 3);
    }

    #[tokio::test]
    async fn list_all_is_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.append(&test_session(0)).await.unwrap();
        repo.append(&test_session(5)).await.unwrap();
        repo.append(&test_session(2)).await.unwrap();

        let sessions = repo.list_all().await.unwrap();
        let minutes: Vec<&str> = sessions
            .iter()
            .map(|s| s.answers.text(1).unwrap())
            .collect();
        assert_eq!(
            minutes,
            vec![
                "Difficulty at minute 5",
                "Difficulty at minute 2",
                "Difficulty at minute 0"
            ]
        );
    }

    #[tokio::test]
    async fn missing_store_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.find_by_id("12345").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_store_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sessions.json");
        std::fs::write(&path, "{ not json at all").unwrap();

        let repo = JsonSessionRepository::new(&path);
        assert!(repo.list_all().await.unwrap().is_empty());

        // Appending after corruption starts a fresh list rather than
        // failing.
        repo.append(&test_session(0)).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        repo.append(&test_session(0)).await.unwrap();

        assert_eq!(repo.find_by_id("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn store_layout_is_a_plain_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        repo.append(&test_session(0)).await.unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert!(first.get("summaryTitle").is_some());
        assert!(first.get("answers").unwrap().get("1").is_some());
    }
}
