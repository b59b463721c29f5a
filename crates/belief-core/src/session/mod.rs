//! Completed sessions and their persistence contract.

pub mod model;
pub mod repository;

pub use model::{summary_title, SessionData, DEFAULT_USER_ID, UNTITLED_SESSION};
pub use repository::SessionRepository;
