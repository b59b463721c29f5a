//! Wiring of configuration to concrete infrastructure.

use anyhow::{anyhow, Result};
use belief_core::session::SessionRepository;
use belief_infrastructure::{AppConfig, JsonSessionRepository};
use std::sync::Arc;

/// Opens the session repository the configuration points at.
pub fn open_session_repository(config: &AppConfig) -> Result<Arc<dyn SessionRepository>> {
    let path = config.sessions_file().map_err(|e| anyhow!(e))?;
    tracing::debug!(path = %path.display(), "opening session store");
    Ok(Arc::new(JsonSessionRepository::new(path)))
}
