//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// No step with the given order exists in the plan
    #[error("Step {order} not found in plan {plan_id}")]
    StepNotFound { plan_id: String, order: u32 },
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
    /// No plans have been created yet
    #[error("No plans found. Create one with `plancraft create <task>`")]
    NoPlans,
    /// A search term matched more than one plan
    #[error("'{term}' matches several plans: {candidates}")]
    AmbiguousPlan { term: String, candidates: String },
    /// AI generation was requested but no API key is configured
    #[error(
        "Gemini API key required. Run `plancraft config --set-api-key <KEY>` or set GEMINI_API_KEY"
    )]
    MissingApiKey,
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
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps an I/O error with the path it occurred at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for the "nothing there" outcomes that callers report
    /// without treating them as crashes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlanNotFound { .. } | Self::StepNotFound { .. } | Self::NoPlans
        )
    }
}

/// Extension trait mapping I/O results onto [`PlannerError::FileSystem`].
pub trait IoResultExt<T> {
    /// Attach the path the I/O operation was performed on.
    fn at_path(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn at_path(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| PlannerError::file_system(path, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
