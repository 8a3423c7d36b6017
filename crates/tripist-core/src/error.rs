//! Error types for the tripist library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tripist operations.
#[derive(Error, Debug)]
pub enum TripistError {
    /// A checklist item's due string does not match the due grammar
    #[error("Invalid due expression {expression:?}: {reason}")]
    InvalidDueExpression { expression: String, reason: String },
    /// One or more checklist lines could not be parsed
    #[error(transparent)]
    ChecklistLoad(#[from] ChecklistLoadError),
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No project with the given name exists in the tracker
    #[error("Project {name:?} not found")]
    ProjectNotFound { name: String },
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
    /// Date, time zone or duration arithmetic errors
    #[error("Time error: {message}")]
    Time {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The tracker rejected some commands of a write batch
    #[error("{failed} of {total} tracker commands failed")]
    TrackerWrite { failed: usize, total: usize },
    /// A tracker compatibility check failed
    #[error("Verification failed at step {step}: {message}")]
    Verification { step: usize, message: String },
}

/// A single malformed line in a checklist source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the source
    pub line: usize,
    /// What was wrong with the line
    pub reason: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Aggregated per-line failures from loading a checklist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLoadError {
    pub lines: Vec<LineError>,
}

impl fmt::Display for ChecklistLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to load checklist: ")?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
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
    pub fn with_source(self, source: rusqlite::Error) -> TripistError {
        TripistError::Database {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> TripistError {
        TripistError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripistError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid due expression error.
    pub fn invalid_due(expression: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDueExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    /// Wraps a jiff error with a message.
    pub fn time(message: impl Into<String>, source: jiff::Error) -> Self {
        Self::Time {
            message: message.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to TripistError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for jiff Results.
pub trait TimeResultExt<T> {
    /// Map time arithmetic or parsing errors with a message.
    fn time_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| TripistError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripistError::database(message).with_source(e))
    }
}

impl<T> TimeResultExt<T> for std::result::Result<T, jiff::Error> {
    fn time_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripistError::time(message, e))
    }
}

/// Result type alias for tripist operations
pub type Result<T> = std::result::Result<T, TripistError>;
