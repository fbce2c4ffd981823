//! Error types for the domain layer.
//!
//! Field-level validation failures live in `domain::validation`; the types here
//! describe misuse of the session itself (wrong step, unknown field, ...).

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Not found errors
    StepNotFound,
    UnknownField,
    UnknownCountry,

    // State errors
    InvalidStateTransition,
    StepLocked,
    IntakeIncomplete,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::StepNotFound => "STEP_NOT_FOUND",
            ErrorCode::UnknownField => "UNKNOWN_FIELD",
            ErrorCode::UnknownCountry => "UNKNOWN_COUNTRY",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::StepLocked => "STEP_LOCKED",
            ErrorCode::IntakeIncomplete => "INTAKE_INCOMPLETE",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// The requested step number does not exist in the schema.
    pub fn step_not_found(step: u8) -> Self {
        Self::new(ErrorCode::StepNotFound, format!("Step {} does not exist", step))
            .with_detail("step", step.to_string())
    }

    /// The step exists but is not the active one.
    pub fn step_locked(step: u8) -> Self {
        Self::new(
            ErrorCode::StepLocked,
            format!("Step {} is not the active step", step),
        )
        .with_detail("step", step.to_string())
    }

    /// The field does not belong to the step it was addressed to.
    pub fn unknown_field(step: u8, field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::UnknownField,
            format!("Field '{}' is not part of step {}", field, step),
        )
        .with_detail("step", step.to_string())
        .with_detail("field", field)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
