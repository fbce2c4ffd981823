//! FieldRule - composable, stateless validation predicates.
//!
//! Every rule except [`FieldRule::Required`] lets an empty value through, so
//! "is it filled in?" and "is what's filled in well-formed?" stay separate
//! concerns that a field can combine freely.

use super::{is_valid_email, FieldError, FieldValue, PatternKind};

/// One validation predicate attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Value must be set and non-empty.
    Required,
    /// Trimmed value must have at least this many characters.
    MinLength(usize),
    /// Value must parse as a number within `[min, max]`.
    Range { min: f64, max: f64 },
    /// Value must match a named text pattern.
    Pattern(PatternKind),
    /// Value must be a well-formed email address.
    Email,
}

impl FieldRule {
    /// The inclusive 0-100 range used for percentage inputs.
    pub const PERCENTAGE: FieldRule = FieldRule::Range {
        min: 0.0,
        max: 100.0,
    };

    /// Short machine name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            FieldRule::Required => "required",
            FieldRule::MinLength(_) => "min_length",
            FieldRule::Range { .. } => "range",
            FieldRule::Pattern(_) => "pattern",
            FieldRule::Email => "email",
        }
    }

    /// Returns true if this is the required rule.
    pub fn is_required(&self) -> bool {
        matches!(self, FieldRule::Required)
    }

    /// Evaluates the rule against a value.
    pub fn check(&self, value: &FieldValue) -> Result<(), FieldError> {
        if value.is_empty() {
            return match self {
                FieldRule::Required => Err(FieldError::RequiredMissing),
                _ => Ok(()),
            };
        }

        match self {
            FieldRule::Required => Ok(()),
            FieldRule::MinLength(min) => {
                if value.as_text().trim().chars().count() < *min {
                    Err(FieldError::TooShort { min: *min })
                } else {
                    Ok(())
                }
            }
            FieldRule::Range { min, max } => match value.as_number() {
                Some(n) if n >= *min && n <= *max => Ok(()),
                _ => Err(FieldError::OutOfRange {
                    min: *min,
                    max: *max,
                }),
            },
            FieldRule::Pattern(kind) => {
                if kind.matches(&value.as_text()) {
                    Ok(())
                } else {
                    Err(FieldError::PatternMismatch { pattern: *kind })
                }
            }
            FieldRule::Email => {
                if is_valid_email(&value.as_text()) {
                    Ok(())
                } else {
                    Err(FieldError::MalformedEmail)
                }
            }
        }
    }
}

/// Runs every rule and collects the failures in rule order.
pub fn check_all(rules: &[FieldRule], value: &FieldValue) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value).err())
        .collect()
}
