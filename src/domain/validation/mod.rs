//! Validation module - field values, rules and their failure reasons.

mod errors;
mod pattern;
mod rule;
mod value;

pub use errors::FieldError;
pub use pattern::{is_valid_email, PatternKind};
pub use rule::{check_all, FieldRule};
pub use value::FieldValue;
