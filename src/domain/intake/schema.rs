//! Step definitions - which fields each step owns and how they are checked.
//!
//! # Steps
//!
//! 1. Personal information → 2. Professional information →
//! 3. Additional information → 4. Energy and scenario →
//! 5. Answer to own question

use crate::domain::validation::{FieldRule, PatternKind};

use super::Field;

/// Suggested answers for the English level questions.
pub const LANGUAGE_LEVELS: [&str; 3] = ["Básico", "Intermedio", "Avanzado"];

/// Values for the scenario question.
pub const SCENARIO_ACTIONS: [&str; 3] = ["public", "private", "other"];

/// Countries offered for the residence question.
pub const RESIDENCE_COUNTRIES: [&str; 14] = [
    "United States",
    "Canada",
    "Mexico",
    "Colombia",
    "Argentina",
    "Brazil",
    "Chile",
    "Peru",
    "Spain",
    "United Kingdom",
    "France",
    "Germany",
    "Italy",
    "Other",
];

/// One field of a step with its validation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub rules: Vec<FieldRule>,
    /// Values the presentation layer offers as options. Not enforced.
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    /// Returns true if the static rules include `Required`.
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(FieldRule::is_required)
    }
}

/// An immutable step of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    number: u8,
    title: &'static str,
    fields: Vec<FieldSpec>,
}

impl StepDefinition {
    /// Starts an empty step definition.
    pub fn new(number: u8, title: &'static str) -> Self {
        Self {
            number,
            title,
            fields: Vec::new(),
        }
    }

    /// Appends a field with its rules.
    pub fn field(self, field: Field, rules: Vec<FieldRule>) -> Self {
        self.field_with_choices(field, rules, &[])
    }

    /// Appends a field that offers a fixed set of options.
    pub fn field_with_choices(
        mut self,
        field: Field,
        rules: Vec<FieldRule>,
        choices: &'static [&'static str],
    ) -> Self {
        self.fields.push(FieldSpec {
            field,
            rules,
            choices,
        });
        self
    }

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Human readable title.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Field specs in display order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the spec for a field of this step.
    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields.iter().find(|s| s.field == field)
    }

    /// Returns true if the field belongs to this step.
    pub fn contains(&self, field: Field) -> bool {
        self.spec(field).is_some()
    }
}

/// The ordered set of steps that make up the intake.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeSchema {
    steps: Vec<StepDefinition>,
}

impl IntakeSchema {
    /// Builds a schema from step definitions, in order.
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        Self { steps }
    }

    /// The five-step candidate intake form.
    pub fn standard() -> Self {
        use FieldRule::{Email, MinLength, Pattern, Required};

        let personal = StepDefinition::new(1, "Personal information")
            .field(
                Field::FullName,
                vec![Required, MinLength(2), Pattern(PatternKind::FullName)],
            )
            .field(
                Field::IdentityDocument,
                vec![Required, Pattern(PatternKind::IdentityDocument)],
            )
            .field(Field::BirthDate, vec![Required])
            .field(Field::BirthPlace, vec![Required, MinLength(2)])
            .field(Field::Email, vec![Required, Email])
            .field(Field::City, vec![Required, MinLength(2)])
            .field_with_choices(Field::Country, vec![Required], &RESIDENCE_COUNTRIES)
            .field(
                Field::PhoneNumber,
                vec![Required, Pattern(PatternKind::PhoneNumber)],
            )
            .field(Field::PhoneCountryCode, vec![Required]);

        let professional = StepDefinition::new(2, "Professional information")
            .field(Field::School, vec![Required, MinLength(2)])
            .field(Field::Degree, vec![Required, MinLength(2)])
            .field(Field::Company, vec![Required, MinLength(2)])
            .field(Field::Position, vec![Required, MinLength(2)])
            .field(Field::StartDate, vec![Required])
            .field(Field::EndDate, vec![Required])
            .field(Field::ImmediateLeader, vec![Required, MinLength(2)])
            .field(Field::MainResponsibilities, vec![Required, MinLength(10)])
            .field(Field::Achievements, vec![Required, MinLength(10)])
            .field(Field::WhyCloseCycle, vec![Required, MinLength(10)])
            .field_with_choices(Field::EnglishLevel, vec![Required], &LANGUAGE_LEVELS)
            .field(Field::EnglishLearningPlace, vec![Required, MinLength(2)])
            .field(Field::OtherLanguage, vec![Required])
            // Requiredness is driven by OtherLanguage, see ConditionalRuleEngine.
            .field_with_choices(Field::OtherLanguageLevel, vec![], &LANGUAGE_LEVELS);

        let additional = StepDefinition::new(3, "Additional information")
            .field(Field::PreferredName, vec![Required, MinLength(2)])
            .field(Field::SuperpowerAndKryptonite, vec![Required, MinLength(10)])
            .field(Field::WhatCaughtAttention, vec![Required, MinLength(10)])
            .field(Field::UniqueWorkStyle, vec![Required, MinLength(10)])
            .field(Field::QuestionForCandidates, vec![Required, MinLength(10)]);

        let mut energy = StepDefinition::new(4, "Energy and scenario");
        for aspect in Field::ENERGY_ASPECTS {
            energy = energy.field(aspect, vec![Required, FieldRule::PERCENTAGE]);
        }
        let energy = energy
            .field_with_choices(Field::ScenarioAction, vec![Required], &SCENARIO_ACTIONS)
            .field(Field::ScenarioExplanation, vec![Required, MinLength(10)]);

        let answer = StepDefinition::new(5, "Answer to your own question")
            .field(Field::AnswerToOwnQuestion, vec![Required, MinLength(10)]);

        Self::new(vec![personal, professional, additional, energy, answer])
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the schema has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the 0-based position of a step number.
    pub fn index_of(&self, number: u8) -> Option<usize> {
        self.steps.iter().position(|s| s.number == number)
    }

    /// Returns a step by number.
    pub fn step(&self, number: u8) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.number == number)
    }

    /// Returns the step that owns a field.
    pub fn step_of(&self, field: Field) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.contains(field))
    }

    /// Returns the step after `number`, or None if it is the last.
    pub fn next(&self, number: u8) -> Option<&StepDefinition> {
        let idx = self.index_of(number)?;
        self.steps.get(idx + 1)
    }
}

impl Default for IntakeSchema {
    fn default() -> Self {
        Self::standard()
    }
}
