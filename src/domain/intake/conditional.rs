//! ConditionalRuleEngine - requiredness that depends on another field.
//!
//! A [`ConditionalRule`] ties a dependent field to a trigger. Whenever either
//! of them changes the engine re-derives whether the dependent is required
//! and, when it no longer applies, clears it. A value written to a dependent
//! that does not apply is therefore dropped, whatever order the writes came
//! in. Applying the same state twice leaves it exactly as applying it once.

use crate::domain::validation::FieldValue;

use super::{Field, StepState};

/// What a trigger value means for its dependent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Dependent must be filled in.
    Required,
    /// Dependent does not apply: optional and cleared.
    NotApplicable,
    /// Trigger is empty; keep whatever was decided before.
    Unchanged,
}

/// "If `trigger` is anything but `opt_out`, `dependent` is required."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRule {
    pub trigger: Field,
    pub dependent: Field,
    /// Trigger answer (compared case-insensitively) that switches the dependent off.
    pub opt_out: &'static str,
}

impl ConditionalRule {
    /// Derives the dependent's requirement from the trigger value.
    pub fn evaluate(&self, trigger_value: &FieldValue) -> Requirement {
        if trigger_value.is_empty() {
            return Requirement::Unchanged;
        }
        if trigger_value.as_text().to_lowercase() == self.opt_out.to_lowercase() {
            Requirement::NotApplicable
        } else {
            Requirement::Required
        }
    }
}

/// Holds the conditional rules of a form and applies them to step state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionalRuleEngine {
    rules: Vec<ConditionalRule>,
}

impl ConditionalRuleEngine {
    /// Creates an engine from a set of rules.
    pub fn new(rules: Vec<ConditionalRule>) -> Self {
        Self { rules }
    }

    /// The intake form's rules: a second language only needs a level if
    /// the candidate actually named one.
    pub fn standard() -> Self {
        Self::new(vec![ConditionalRule {
            trigger: Field::OtherLanguage,
            dependent: Field::OtherLanguageLevel,
            opt_out: "no",
        }])
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[ConditionalRule] {
        &self.rules
    }

    /// Re-evaluates every rule that `changed` is the trigger or the
    /// dependent of against `state`.
    pub fn apply(&self, changed: Field, state: &mut StepState) {
        let affected = self
            .rules
            .iter()
            .filter(|r| r.trigger == changed || r.dependent == changed);
        for rule in affected {
            match rule.evaluate(state.value(rule.trigger)) {
                Requirement::Required => state.require(rule.dependent),
                Requirement::NotApplicable => {
                    state.relax(rule.dependent);
                    state.set_value(rule.dependent, FieldValue::Empty);
                }
                Requirement::Unchanged => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StepStatus;
    use crate::domain::intake::IntakeSchema;

    fn language_rule() -> ConditionalRule {
        ConditionalRule {
            trigger: Field::OtherLanguage,
            dependent: Field::OtherLanguageLevel,
            opt_out: "no",
        }
    }

    fn professional_state() -> StepState {
        let schema = IntakeSchema::standard();
        StepState::new(schema.step(2).unwrap(), StepStatus::Active)
    }

    #[test]
    fn evaluate_is_case_insensitive_for_opt_out() {
        let rule = language_rule();
        for answer in ["no", "No", "NO", "nO"] {
            assert_eq!(
                rule.evaluate(&FieldValue::text(answer)),
                Requirement::NotApplicable
            );
        }
    }

    #[test]
    fn evaluate_requires_for_any_other_answer() {
        let rule = language_rule();
        assert_eq!(rule.evaluate(&FieldValue::text("French")), Requirement::Required);
        assert_eq!(rule.evaluate(&FieldValue::text("Nope")), Requirement::Required);
    }

    #[test]
    fn evaluate_empty_trigger_is_unchanged() {
        let rule = language_rule();
        assert_eq!(rule.evaluate(&FieldValue::Empty), Requirement::Unchanged);
        assert_eq!(rule.evaluate(&FieldValue::text("")), Requirement::Unchanged);
    }

    #[test]
    fn apply_opt_out_clears_dependent() {
        let engine = ConditionalRuleEngine::standard();
        let mut state = professional_state();
        state.set_value(Field::OtherLanguageLevel, FieldValue::text("Avanzado"));
        state.require(Field::OtherLanguageLevel);

        state.set_value(Field::OtherLanguage, FieldValue::text("No"));
        engine.apply(Field::OtherLanguage, &mut state);

        assert!(!state.is_conditionally_required(Field::OtherLanguageLevel));
        assert_eq!(state.value(Field::OtherLanguageLevel), &FieldValue::Empty);
    }

    #[test]
    fn apply_is_idempotent() {
        let engine = ConditionalRuleEngine::standard();
        let mut once = professional_state();
        once.set_value(Field::OtherLanguage, FieldValue::text("French"));
        engine.apply(Field::OtherLanguage, &mut once);

        let mut twice = once.clone();
        engine.apply(Field::OtherLanguage, &mut twice);

        assert_eq!(once, twice);
        assert!(twice.is_conditionally_required(Field::OtherLanguageLevel));
    }

    #[test]
    fn apply_ignores_unrelated_fields() {
        let engine = ConditionalRuleEngine::standard();
        let mut state = professional_state();
        let before = state.clone();
        engine.apply(Field::School, &mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn dependent_written_after_opt_out_is_cleared() {
        let engine = ConditionalRuleEngine::standard();
        let mut state = professional_state();
        state.set_value(Field::OtherLanguage, FieldValue::text("No"));
        engine.apply(Field::OtherLanguage, &mut state);

        state.set_value(Field::OtherLanguageLevel, FieldValue::text("Avanzado"));
        engine.apply(Field::OtherLanguageLevel, &mut state);

        assert_eq!(state.value(Field::OtherLanguageLevel), &FieldValue::Empty);
        assert!(!state.is_conditionally_required(Field::OtherLanguageLevel));
    }

    #[test]
    fn dependent_write_keeps_requirement_when_language_named() {
        let engine = ConditionalRuleEngine::standard();
        let mut state = professional_state();
        state.set_value(Field::OtherLanguage, FieldValue::text("French"));
        engine.apply(Field::OtherLanguage, &mut state);

        state.set_value(Field::OtherLanguageLevel, FieldValue::text("Básico"));
        engine.apply(Field::OtherLanguageLevel, &mut state);

        assert_eq!(
            state.value(Field::OtherLanguageLevel),
            &FieldValue::text("Básico")
        );
        assert!(state.is_conditionally_required(Field::OtherLanguageLevel));
    }
}
