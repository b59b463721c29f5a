//! Review use case implementation.
//!
//! Read-only access to completed sessions for the history and summary
//! views.

use anyhow::Result;
use belief_core::reference::{location_attributes, LocationAttributes};
use belief_core::session::{SessionData, SessionRepository};
use std::sync::Arc;

/// A completed session together with its per-location attribute cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session: SessionData,
    pub locations: Vec<LocationAttributes>,
}

/// Use case for reviewing completed sessions.
pub struct ReviewUseCase {
    session_repository: Arc<dyn SessionRepository>,
}

impl ReviewUseCase {
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// All completed sessions, newest first.
    pub async fn list_sessions(&self) -> Result<Vec<SessionData>> {
        Ok(self.session_repository.list_all().await?)
    }

    /// The full summary for one session, or `None` when the id is unknown.
    pub async fn session_summary(&self, session_id: &str) -> Result<Option<SessionSummary>> {
        let Some(session) = self.session_repository.find_by_id(session_id).await? else {
            return Ok(None);
        };

        let locations = location_attributes(&session.answers);
        Ok(Some(SessionSummary { session, locations }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use belief_core::answer::AnswerSet;
    use belief_core::error::Result as CoreResult;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSessionRepository {
        sessions: Mutex<Vec<SessionData>>,
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn append(&self, session: &SessionData) -> CoreResult<()> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }

        async fn find_by_id(&self, session_id: &str) -> CoreResult<Option<SessionData>> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == session_id)
                .cloned())
        }

        async fn list_all(&self) -> CoreResult<Vec<SessionData>> {
            Ok(self.sessions.lock().unwrap().clone())
        }
    }

    fn completed_session() -> SessionData {
        let mut answers = AnswerSet::new();
        answers.insert(1, "I feel stuck at work");
        answers.insert(3, "Chest: tight, Throat: dry");
        answers.insert(4, "Chest: knot\nThroat: cloud");
        answers.insert(5, "Chest: dark red");
        answers.insert(11, "The Breaking Point");
        SessionData::new("tester", answers)
    }

    #[tokio::test]
    async fn summary_includes_location_cards() {
        let repo = Arc::new(MockSessionRepository::default());
        let session = completed_session();
        repo.append(&session).await.unwrap();

        let review = ReviewUseCase::new(repo);
        let summary = review.session_summary(&session.id).await.unwrap().unwrap();

        assert_eq!(summary.session.summary_title, "The Breaking Point");
        assert_eq!(summary.locations.len(), 2);
        assert_eq!(summary.locations[0].location, "Chest");
        assert_eq!(summary.locations[0].shape, "knot");
        assert_eq!(summary.locations[1].color, "");
    }

    #[tokio::test]
    async fn unknown_session_is_none() {
        let review = ReviewUseCase::new(Arc::new(MockSessionRepository::default()));
        assert!(review.session_summary("missing").await.unwrap().is_none());
    }
}
