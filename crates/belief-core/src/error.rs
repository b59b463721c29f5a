//! Error types for the Belief Unlocked application.

use thiserror::Error;

/// A shared error type for the entire application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The session store is the
/// only fallible collaborator, so the variants cover file I/O and record
/// (de)serialization.
#[derive(Error, Debug)]
pub enum BeliefError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },
}

impl BeliefError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for BeliefError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BeliefError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BeliefError>`.
pub type Result<T> = std::result::Result<T, BeliefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_kind() {
        let err: BeliefError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, BeliefError::Io { .. }));
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn json_errors_convert_to_serialization() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: BeliefError = json_err.into();
        match err {
            BeliefError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected variant: {}", other),
        }
    }

    #[test]
    fn io_helper_carries_the_message() {
        let err = BeliefError::io("Failed to read session store");
        assert_eq!(err.to_string(), "IO error: Failed to read session store");
    }
}
