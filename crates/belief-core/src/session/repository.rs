//! Session repository trait.
//!
//! Defines the interface for session persistence operations, decoupling the
//! wizard from the specific storage mechanism (JSON file today, a real
//! backend later).

use super::model::SessionData;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract append-only store of completed sessions.
///
/// Implementations should treat read failures defensively: an absent or
/// unreadable store reads as empty rather than failing the caller.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Appends a completed session to the store.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Session appended successfully
    /// - `Err(BeliefError)`: Error occurred during save
    async fn append(&self, session: &SessionData) -> Result<()>;

    /// Finds a session by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SessionData))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(BeliefError)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<SessionData>>;

    /// Lists all stored sessions, newest first.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SessionData>)`: All stored sessions
    /// - `Err(BeliefError)`: Error occurred during listing
    async fn list_all(&self) -> Result<Vec<SessionData>>;
}
