//! Error types for the study planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all planner operations.
///
/// Feedback service failures never surface through this type to callers of
/// [`crate::feedback::FeedbackGateway`]; the gateway converts them to its
/// fallback text. They appear here only so generators can report them.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Task id that the curriculum does not contain
    #[error("Task with ID '{id}' not found")]
    TaskNotFound { id: String },
    /// Date that is not a day of the curriculum
    #[error("No study day scheduled on {date}")]
    DayNotFound { date: String },
    /// Week number outside 1..=23
    #[error("Week {week} is outside the curriculum")]
    WeekOutOfRange { week: u8 },
    /// Phase id that does not exist
    #[error("Phase {id} not found")]
    PhaseNotFound { id: u8 },
    /// A feedback request for this date has not resolved yet
    #[error("Feedback for {date} is already being generated")]
    FeedbackPending { date: String },
    /// Remote text generation failed
    #[error("Feedback service error: {message}")]
    FeedbackService { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
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

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CadenceError {
        CadenceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CadenceError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a feedback service error from anything displayable.
    pub fn feedback_service(message: impl fmt::Display) -> Self {
        Self::FeedbackService {
            message: message.to_string(),
        }
    }

    /// Creates a file system error for `path`.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to CadenceError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for remote call Results.
pub trait FeedbackResultExt<T> {
    /// Map transport errors with a message.
    fn feedback_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| CadenceError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> FeedbackResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn feedback_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CadenceError::feedback_service(format!("{message}: {e}")))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, CadenceError>;
