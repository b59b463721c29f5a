//! Domain layer for Belief Unlocked.
//!
//! Holds the static question catalog and reference lists, the answer model,
//! the structured-text parsing and suggestion engine, and the session model
//! with its persistence contract. Everything here is pure and synchronous
//! except the repository trait; storage and interaction live in the
//! infrastructure and CLI crates.

pub mod answer;
pub mod body_location;
pub mod emotion;
pub mod error;
pub mod parse;
pub mod prefill;
pub mod prompt;
pub mod question;
pub mod reference;
pub mod session;
pub mod texture;

// Re-export common error type
pub use error::BeliefError;
