use thiserror::Error;

use crate::boundary::Boundary;

/// Unified error type for release-tag operations
#[derive(Error, Debug)]
pub enum ReleaseTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version descriptor error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Precondition(#[from] Boundary),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tag
pub type Result<T> = std::result::Result<T, ReleaseTagError>;

impl ReleaseTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseTagError::Config(msg.into())
    }

    /// Create a version descriptor error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseTagError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleaseTagError::Remote(msg.into())
    }

    /// Create an editor error with context
    pub fn editor(msg: impl Into<String>) -> Self {
        ReleaseTagError::Editor(msg.into())
    }

    /// True when the operator can recover by doing the work or passing `--force yes`.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ReleaseTagError::Precondition(_))
    }
}

/// A network failure carrying an optional message and the error that caused it.
///
/// Constructible with no arguments so it can travel through generic
/// error plumbing that only knows how to build a default value.
#[derive(Error, Debug, Default)]
#[error("{}", .message.as_deref().unwrap_or(""))]
pub struct NetworkError {
    pub message: Option<String>,
    #[source]
    pub wrapped: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl NetworkError {
    pub fn wrapping(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        NetworkError {
            message: Some(message.into()),
            wrapped: Some(Box::new(cause)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = ReleaseTagError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseTagError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseTagError::config("x"), "Configuration error"),
            (ReleaseTagError::version("x"), "Version descriptor error"),
            (ReleaseTagError::tag("x"), "Tag error"),
            (ReleaseTagError::remote("x"), "Remote operation failed"),
            (ReleaseTagError::editor("x"), "Editor error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_precondition_is_distinguished() {
        let err: ReleaseTagError = Boundary::NoWorkSinceTag {
            tag: "1.2.0".to_string(),
        }
        .into();
        assert!(err.is_precondition());
        assert!(!ReleaseTagError::tag("boom").is_precondition());
    }

    #[test]
    fn test_network_error_default_is_empty() {
        let err = NetworkError::default();
        assert_eq!(err.to_string(), "");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_network_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = NetworkError::wrapping("push to origin failed", cause);
        assert_eq!(err.to_string(), "push to origin failed");
        assert_eq!(err.source().unwrap().to_string(), "timed out");

        let wrapped: ReleaseTagError = err.into();
        assert_eq!(wrapped.to_string(), "Network error: push to origin failed");
    }
}
