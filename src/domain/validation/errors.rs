//! Field-level validation failures.

use serde::Serialize;
use thiserror::Error;

use super::PatternKind;

/// Why a single field value was rejected.
///
/// These are structured reasons, not display text; the presentation layer
/// decides how to word them.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("Value is required")]
    RequiredMissing,

    #[error("Must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Must be a number between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },

    #[error("Does not match the {pattern} format")]
    PatternMismatch { pattern: PatternKind },

    #[error("Malformed email address")]
    MalformedEmail,
}
