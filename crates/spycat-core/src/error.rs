//! Error types for the agency library.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all agency operations.
#[derive(Error, Debug)]
pub enum AgencyError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Cat not found for the given ID
    #[error("Cat not found")]
    CatNotFound { id: Uuid },
    /// Mission not found for the given ID
    #[error("Mission not found")]
    MissionNotFound { id: Uuid },
    /// Target not found for the given ID
    #[error("Target not found")]
    TargetNotFound { id: Uuid },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The cat is still referenced by at least one mission
    #[error("Can't delete cat with missions")]
    CatHasMissions { id: Uuid },
    /// The mission has already been completed
    #[error("Mission already completed")]
    MissionAlreadyCompleted { id: Uuid },
    /// The mission already has a cat linked to it
    #[error("Mission cat already assigned")]
    MissionCatAssigned { id: Uuid },
    /// The target has already been completed
    #[error("Target already completed")]
    TargetAlreadyCompleted { id: Uuid },
    /// The remote breed list could not be fetched or decoded
    #[error("Breed lookup failed: {message}")]
    BreedLookup { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification used by transports to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced record does not exist
    NotFound,
    /// A field is malformed or out of range
    InvalidInput,
    /// The request violates a rule given the current state
    Conflict,
    /// Anything the caller cannot fix
    Internal,
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
    pub fn with_source(self, source: rusqlite::Error) -> AgencyError {
        AgencyError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> AgencyError {
        AgencyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AgencyError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a join failure from a blocking database task.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }

    /// Classifies the error for transport-level mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CatNotFound { .. } | Self::MissionNotFound { .. } | Self::TargetNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::CatHasMissions { .. }
            | Self::MissionAlreadyCompleted { .. }
            | Self::MissionCatAssigned { .. }
            | Self::TargetAlreadyCompleted { .. } => ErrorKind::Conflict,
            Self::Database { .. }
            | Self::BreedLookup { .. }
            | Self::FileSystem { .. }
            | Self::XdgDirectory(_)
            | Self::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Human-readable message safe to hand back to an API caller.
    ///
    /// Validation errors expose only their reason; internal errors collapse
    /// into a generic message so storage details do not leak.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidInput { reason, .. } => reason.clone(),
            _ if self.kind() == ErrorKind::Internal => "Internal server error".to_string(),
            _ => self.to_string(),
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
        self.map_err(|e| AgencyError::database(message).with_source(e))
    }
}

/// Result type alias for agency operations
pub type Result<T> = std::result::Result<T, AgencyError>;
