//! Error types for the compass library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Language;

/// Comprehensive error type for all compass operations.
#[derive(Error, Debug)]
pub enum CompassError {
    /// An answer does not match the question's declared type or range
    #[error("Invalid answer for question '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },
    /// No question with the given ID exists in the catalog
    #[error("Question with ID '{id}' not found")]
    UnknownQuestion { id: String },
    /// The question exists but is not the one currently displayed
    #[error("Question '{id}' is not asked on the current step '{step}'")]
    QuestionNotOnCurrentStep { id: String, step: String },
    /// Answers are only accepted while a question step is displayed
    #[error("The session is not on a question step")]
    SessionClosed,
    /// Advance refused because the current step has no recorded answer
    #[error("Step '{step}' is unanswered; fill in all answers before proceeding")]
    StepIncomplete { step: String },
    /// The step catalog violates one of its structural invariants
    #[error("Invalid step catalog: {reason}")]
    InvalidCatalog { reason: String },
    /// A content key has no text for a language
    #[error("Missing content for key '{key}' in language '{language}'")]
    MissingContent { language: Language, key: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CompassError {
        CompassError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating answer validation errors.
pub struct InvalidAnswerBuilder {
    question: String,
}

impl InvalidAnswerBuilder {
    /// Create a new invalid answer error builder for a question.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CompassError {
        CompassError::InvalidAnswer {
            question: self.question,
            reason: reason.into(),
        }
    }
}

impl CompassError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for answer validation errors.
    pub fn invalid_answer(question: impl Into<String>) -> InvalidAnswerBuilder {
        InvalidAnswerBuilder::new(question)
    }

    /// Creates a catalog validation error.
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Whether the error is a recoverable validation result the user can fix
    /// by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAnswer { .. }
                | Self::UnknownQuestion { .. }
                | Self::QuestionNotOnCurrentStep { .. }
                | Self::SessionClosed
                | Self::StepIncomplete { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CompassError::database(message).with_source(e))
    }
}

/// Extension trait attaching a file path to I/O failures.
pub trait IoResultExt<T> {
    /// Map I/O errors to [`CompassError::FileSystem`] for `path`.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| CompassError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for compass operations
pub type Result<T> = std::result::Result<T, CompassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answer_builder() {
        let err = CompassError::invalid_answer("vas_now").with_reason("11 is outside 0..=10");
        assert_eq!(
            err.to_string(),
            "Invalid answer for question 'vas_now': 11 is outside 0..=10"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_content_message() {
        let err = CompassError::MissingContent {
            language: Language::En,
            key: "TITLE".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing content for key 'TITLE' in language 'en'"
        );
        assert!(!err.is_validation());
    }
}
