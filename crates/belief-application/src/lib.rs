//! Application layer for Belief Unlocked.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level business
//! logic.

pub mod bootstrap;
pub mod review_usecase;
pub mod wizard_usecase;

pub use bootstrap::open_session_repository;
pub use review_usecase::{ReviewUseCase, SessionSummary};
pub use wizard_usecase::{StepOutcome, WizardUseCase, DEFAULT_SCALE_VALUE};
