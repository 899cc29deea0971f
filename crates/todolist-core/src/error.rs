//! Error types for the todolist library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all project and task operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Project not found for the given ID
    #[error("No project with the id {id} exists")]
    ProjectNotFound { id: u64 },
    /// Project not found for the given name
    #[error("No project with the name '{name}' exists")]
    ProjectNameNotFound { name: String },
    /// Task not found for the given ID
    #[error("No task with the id {id} exists")]
    TaskNotFound { id: u64 },
    /// Another project already holds the name
    #[error("Project with the name '{name}' already exists")]
    ProjectAlreadyExists { name: String },
    /// Project removal blocked by tasks still referencing it
    #[error("Project with the id {id} cannot be removed because {count} task(s) reference it")]
    ProjectHasTasks { id: u64, count: usize },
    /// Completing a task that is already completed
    #[error("Task with the id {id} is already completed")]
    TaskAlreadyCompleted { id: u64 },
    /// Uncompleting a task that is not completed
    #[error("Task with the id {id} is not marked as completed")]
    TaskNotCompleted { id: u64 },
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
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// The conceptual category of a [`TodoError`].
///
/// Callers translate these into transport-specific responses; the core only
/// reports the kind and a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Conflict,
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Storage => "storage",
        };
        f.write_str(label)
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
    pub fn with_source(self, source: rusqlite::Error) -> TodoError {
        TodoError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TodoError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns the conceptual kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::InvalidInput { .. } => ErrorKind::InvalidArgument,
            TodoError::ProjectNotFound { .. }
            | TodoError::ProjectNameNotFound { .. }
            | TodoError::TaskNotFound { .. } => ErrorKind::NotFound,
            TodoError::ProjectAlreadyExists { .. } => ErrorKind::AlreadyExists,
            TodoError::ProjectHasTasks { .. }
            | TodoError::TaskAlreadyCompleted { .. }
            | TodoError::TaskNotCompleted { .. } => ErrorKind::Conflict,
            TodoError::Database { .. }
            | TodoError::FileSystem { .. }
            | TodoError::XdgDirectory(_)
            | TodoError::Configuration { .. } => ErrorKind::Storage,
        }
    }

    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        TodoError::Configuration {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TodoError::database(message).with_source(e))
    }
}

/// Result type alias for todolist operations
pub type Result<T> = std::result::Result<T, TodoError>;
