//! StepState - the mutable half of a step: values, touched flags, status.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{DomainError, StateMachine, StepStatus};
use crate::domain::validation::FieldValue;

use super::{Field, StepDefinition};

static UNSET: FieldValue = FieldValue::Empty;

/// Current input of one step.
///
/// Only the owning [`FormSession`](super::FormSession) mutates this; callers
/// get shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    number: u8,
    status: StepStatus,
    values: BTreeMap<Field, FieldValue>,
    touched: BTreeSet<Field>,
    conditionally_required: BTreeSet<Field>,
}

impl StepState {
    /// Creates a state with every field of the definition unset.
    pub fn new(definition: &StepDefinition, status: StepStatus) -> Self {
        Self {
            number: definition.number(),
            status,
            values: definition
                .fields()
                .iter()
                .map(|spec| (spec.field, FieldValue::Empty))
                .collect(),
            touched: BTreeSet::new(),
            conditionally_required: BTreeSet::new(),
        }
    }

    /// Step number this state belongs to.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Lifecycle status.
    pub fn status(&self) -> StepStatus {
        self.status
    }

    /// True while this step accepts input.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// True once the step passed validation.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Current value of a field; unset fields read as `Empty`.
    pub fn value(&self, field: Field) -> &FieldValue {
        self.values.get(&field).unwrap_or(&UNSET)
    }

    /// All values of the step in field order.
    pub fn values(&self) -> &BTreeMap<Field, FieldValue> {
        &self.values
    }

    /// Returns true if the field has been touched.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Touched fields.
    pub fn touched(&self) -> &BTreeSet<Field> {
        &self.touched
    }

    /// Returns true if a conditional rule currently requires the field.
    pub fn is_conditionally_required(&self, field: Field) -> bool {
        self.conditionally_required.contains(&field)
    }

    pub(crate) fn set_value(&mut self, field: Field, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub(crate) fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub(crate) fn touch_all(&mut self, fields: impl IntoIterator<Item = Field>) {
        self.touched.extend(fields);
    }

    pub(crate) fn require(&mut self, field: Field) {
        self.conditionally_required.insert(field);
    }

    pub(crate) fn relax(&mut self, field: Field) {
        self.conditionally_required.remove(&field);
    }

    pub(crate) fn activate(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(StepStatus::Active)?;
        Ok(())
    }

    pub(crate) fn complete(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(StepStatus::Completed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::IntakeSchema;

    fn personal_state() -> StepState {
        let schema = IntakeSchema::standard();
        StepState::new(schema.step(1).unwrap(), StepStatus::Active)
    }

    #[test]
    fn new_state_has_every_field_unset() {
        let state = personal_state();
        assert_eq!(state.values().len(), 9);
        assert!(state.values().values().all(FieldValue::is_empty));
        assert!(state.touched().is_empty());
    }

    #[test]
    fn value_of_foreign_field_reads_empty() {
        let state = personal_state();
        assert_eq!(state.value(Field::AnswerToOwnQuestion), &FieldValue::Empty);
    }

    #[test]
    fn activate_and_complete_follow_status_machine() {
        let schema = IntakeSchema::standard();
        let mut state = StepState::new(schema.step(2).unwrap(), StepStatus::Pending);

        assert!(state.complete().is_err());
        state.activate().unwrap();
        assert!(state.is_active());
        state.complete().unwrap();
        assert!(state.is_completed());
        assert!(!state.is_active());
        assert!(state.activate().is_err());
    }

    #[test]
    fn require_and_relax_toggle_conditional_flag() {
        let mut state = personal_state();
        state.require(Field::City);
        assert!(state.is_conditionally_required(Field::City));
        state.relax(Field::City);
        assert!(!state.is_conditionally_required(Field::City));
    }
}
