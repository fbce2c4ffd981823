//! Valid answers for every step, shared by unit tests.

use crate::domain::validation::FieldValue;

use super::{Field, FormSession};

pub(crate) fn personal() -> Vec<(Field, FieldValue)> {
    vec![
        (Field::FullName, "Ana María Pérez".into()),
        (Field::IdentityDocument, "CC1234567".into()),
        (Field::BirthDate, "1990-04-12".into()),
        (Field::BirthPlace, "Medellín".into()),
        (Field::Email, "ana@example.com".into()),
        (Field::City, "Bogotá".into()),
        (Field::Country, "Colombia".into()),
        (Field::PhoneNumber, "300 123 4567".into()),
        (Field::PhoneCountryCode, "+57".into()),
    ]
}

pub(crate) fn professional(other_language: &str) -> Vec<(Field, FieldValue)> {
    vec![
        (Field::School, "Universidad Nacional".into()),
        (Field::Degree, "Ingeniería".into()),
        (Field::Company, "Acme".into()),
        (Field::Position, "Analyst".into()),
        (Field::StartDate, "2019-01-01".into()),
        (Field::EndDate, "2023-06-30".into()),
        (Field::ImmediateLeader, "Carlos".into()),
        (Field::MainResponsibilities, "Reporting and data pipelines".into()),
        (Field::Achievements, "Cut report time in half".into()),
        (Field::WhyCloseCycle, "Looking for new challenges".into()),
        (Field::EnglishLevel, "Intermedio".into()),
        (Field::EnglishLearningPlace, "Online".into()),
        (Field::OtherLanguage, other_language.into()),
    ]
}

pub(crate) fn additional() -> Vec<(Field, FieldValue)> {
    vec![
        (Field::PreferredName, "Ana".into()),
        (Field::SuperpowerAndKryptonite, "Focus, and too much coffee".into()),
        (Field::WhatCaughtAttention, "The team and the product".into()),
        (Field::UniqueWorkStyle, "Write everything down first".into()),
        (Field::QuestionForCandidates, "What would you automate first?".into()),
    ]
}

pub(crate) fn energy() -> Vec<(Field, FieldValue)> {
    vec![
        (Field::EnergyAspect1, 40u32.into()),
        (Field::EnergyAspect2, 30u32.into()),
        (Field::EnergyAspect3, 20u32.into()),
        (Field::EnergyAspect4, 10u32.into()),
        (Field::ScenarioAction, "private".into()),
        (Field::ScenarioExplanation, "Feedback works best one on one".into()),
    ]
}

pub(crate) fn answer() -> Vec<(Field, FieldValue)> {
    vec![(Field::AnswerToOwnQuestion, "The monthly reporting run".into())]
}

/// Valid answers for all five steps, in order.
pub(crate) fn all_steps() -> Vec<(u8, Vec<(Field, FieldValue)>)> {
    vec![
        (1, personal()),
        (2, professional("No")),
        (3, additional()),
        (4, energy()),
        (5, answer()),
    ]
}

pub(crate) fn completed_session() -> FormSession {
    let mut session = FormSession::new();
    for (step, values) in all_steps() {
        assert!(session.submit_step(step, values).unwrap().is_advanced());
    }
    session
}
