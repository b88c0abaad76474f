//! Unified Error Type System
//!
//! Centralized error types for the engines, storage, and CLI.
//!
//! ## Error Classes
//!
//! - **Validation**: malformed input, rejected before synthesis begins
//! - **Collaborator**: storage and I/O failures, surfaced with their message
//! - **Config**: configuration extraction or range failures
//!
//! Synthesis and scoring themselves have no failure modes once input is validated.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// Field that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Invalid {}: {}", field, self.message)
        } else {
            write!(f, "Invalid input: {}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Required field missing or blank
    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::MissingField, message).with_field(field)
    }

    /// Value present but malformed
    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::Format, message).with_field(field)
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field missing or blank
    MissingField,
    /// Invalid format
    Format,
    /// Value out of range or unknown
    Range,
    /// Duplicate or contradictory values
    Consistency,
    /// Operation precondition not met (e.g. nothing to aggregate)
    Precondition,
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum WebHuntError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Report not found: {id}")]
    NotFound { id: String },
}

impl From<ValidationError> for WebHuntError {
    fn from(err: ValidationError) -> Self {
        WebHuntError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, WebHuntError>;

impl WebHuntError {
    /// Whether the failure came from bad input (shown inline, never retried)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Collaborator failures are transient from the caller's point of view
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Database(_) | Self::Storage(_)
        )
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (lazy evaluation)
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| WebHuntError::Storage(format!("{}: {}", context.into(), e)))
    }

    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| WebHuntError::Storage(format!("{}: {}", f().into(), e)))
    }
}
