//! Logger error types

use thiserror::Error;

/// Errors that can occur inside the logger
#[derive(Error, Debug)]
pub enum LogError {
    /// Level name did not match any canonical name
    #[error("level not found: {0}")]
    LevelNotFound(String),

    /// Writing or flushing the sink failed
    #[error("failed to write to log sink: {0}")]
    Sink(#[from] std::io::Error),
}

impl LogError {
    /// Create a level-not-found error
    pub fn level_not_found(name: impl Into<String>) -> Self {
        Self::LevelNotFound(name.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LogError::level_not_found("debug");
        assert_eq!(err.to_string(), "level not found: debug");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LogError = io.into();
        assert!(matches!(err, LogError::Sink(_)));
        assert_eq!(err.to_string(), "failed to write to log sink: pipe closed");
    }
}
