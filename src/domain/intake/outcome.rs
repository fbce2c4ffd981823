//! Results of validating and submitting a step.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::validation::FieldError;

use super::{Field, UserRecord};

/// Per-field failures of a step; fields that passed are absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StepErrors {
    errors: BTreeMap<Field, Vec<FieldError>>,
}

impl StepErrors {
    /// Records the failures of one field. Empty lists are ignored.
    pub fn insert(&mut self, field: Field, errors: Vec<FieldError>) {
        if !errors.is_empty() {
            self.errors.insert(field, errors);
        }
    }

    /// Failures of a field, empty if it passed.
    pub fn get(&self, field: Field) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields that failed, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Iterates `(field, failures)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[FieldError])> + '_ {
        self.errors.iter().map(|(f, e)| (*f, e.as_slice()))
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if every field passed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// What happened to a submitted step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Every rule passed; the step is completed and merged.
    Advanced {
        step: u8,
        /// The newly active step, `None` when the intake is finished.
        next_step: Option<u8>,
        record: UserRecord,
    },
    /// Every rule passed but the step has not been completed yet.
    ///
    /// `record` is the record as it will be once the step is committed.
    Validated { step: u8, record: UserRecord },
    /// At least one rule failed; nothing was completed or merged.
    Rejected { step: u8, errors: StepErrors },
}

impl StepOutcome {
    /// Returns true if the step was completed.
    pub fn is_advanced(&self) -> bool {
        matches!(self, StepOutcome::Advanced { .. })
    }

    /// Failures of a rejected submission; empty on success.
    pub fn errors(&self) -> Option<&StepErrors> {
        match self {
            StepOutcome::Rejected { errors, .. } => Some(errors),
            StepOutcome::Advanced { .. } | StepOutcome::Validated { .. } => None,
        }
    }

    /// Returns true if the step passed validation and awaits commit.
    pub fn is_validated(&self) -> bool {
        matches!(self, StepOutcome::Validated { .. })
    }

    /// Record snapshot after a submission that passed validation.
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            StepOutcome::Advanced { record, .. } | StepOutcome::Validated { record, .. } => {
                Some(record)
            }
            StepOutcome::Rejected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldValue;

    #[test]
    fn insert_ignores_passing_fields() {
        let mut errors = StepErrors::default();
        errors.insert(Field::City, vec![]);
        assert!(errors.is_empty());
        assert!(errors.get(Field::City).is_empty());
    }

    #[test]
    fn rejected_outcome_exposes_errors() {
        let mut errors = StepErrors::default();
        errors.insert(Field::Email, vec![FieldError::MalformedEmail]);
        let outcome = StepOutcome::Rejected { step: 1, errors };

        assert!(!outcome.is_advanced());
        assert!(outcome.record().is_none());
        assert_eq!(
            outcome.errors().unwrap().get(Field::Email),
            &[FieldError::MalformedEmail]
        );
    }

    #[test]
    fn validated_outcome_carries_pending_record() {
        let mut record = UserRecord::new();
        record.merge([(&Field::City, &FieldValue::from("Cali"))]);
        let outcome = StepOutcome::Validated { step: 1, record };

        assert!(!outcome.is_advanced());
        assert!(outcome.is_validated());
        assert!(outcome.errors().is_none());
        assert_eq!(
            outcome.record().unwrap().get(Field::City),
            Some(&FieldValue::from("Cali"))
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"], "validated");
    }

    #[test]
    fn outcome_serializes_with_result_tag() {
        let outcome = StepOutcome::Advanced {
            step: 5,
            next_step: None,
            record: UserRecord::new(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"], "advanced");
        assert_eq!(json["step"], 5);
        assert!(json["next_step"].is_null());
    }
}
