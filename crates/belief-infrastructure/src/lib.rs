//! Infrastructure layer: paths, configuration, and the file-backed session
//! store.

pub mod config_service;
pub mod json_session_repository;
pub mod paths;

pub use config_service::{AppConfig, DEFAULT_SUGGESTION_LIMIT};
pub use json_session_repository::JsonSessionRepository;
pub use paths::{BeliefPaths, PathError};
