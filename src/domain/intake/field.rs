//! Field - the closed set of inputs the intake form collects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every input of the intake form, in form order.
///
/// Ordering follows declaration order, which is also step order, so a
/// `BTreeMap<Field, _>` iterates the way the form reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Personal information
    FullName,
    IdentityDocument,
    BirthDate,
    BirthPlace,
    Email,
    City,
    Country,
    PhoneNumber,
    PhoneCountryCode,

    // Professional history and work experience
    School,
    Degree,
    Company,
    Position,
    StartDate,
    EndDate,
    ImmediateLeader,
    MainResponsibilities,
    Achievements,
    WhyCloseCycle,

    // Languages
    EnglishLevel,
    EnglishLearningPlace,
    OtherLanguage,
    OtherLanguageLevel,

    // Additional personal information
    PreferredName,
    SuperpowerAndKryptonite,
    WhatCaughtAttention,
    UniqueWorkStyle,
    QuestionForCandidates,

    // Energy distribution and scenario
    EnergyAspect1,
    EnergyAspect2,
    EnergyAspect3,
    EnergyAspect4,
    ScenarioAction,
    ScenarioExplanation,

    // Answer to own question
    AnswerToOwnQuestion,
}

/// Raised when a string does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field name: {0}")]
pub struct UnknownFieldName(pub String);

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 35] = [
        Field::FullName,
        Field::IdentityDocument,
        Field::BirthDate,
        Field::BirthPlace,
        Field::Email,
        Field::City,
        Field::Country,
        Field::PhoneNumber,
        Field::PhoneCountryCode,
        Field::School,
        Field::Degree,
        Field::Company,
        Field::Position,
        Field::StartDate,
        Field::EndDate,
        Field::ImmediateLeader,
        Field::MainResponsibilities,
        Field::Achievements,
        Field::WhyCloseCycle,
        Field::EnglishLevel,
        Field::EnglishLearningPlace,
        Field::OtherLanguage,
        Field::OtherLanguageLevel,
        Field::PreferredName,
        Field::SuperpowerAndKryptonite,
        Field::WhatCaughtAttention,
        Field::UniqueWorkStyle,
        Field::QuestionForCandidates,
        Field::EnergyAspect1,
        Field::EnergyAspect2,
        Field::EnergyAspect3,
        Field::EnergyAspect4,
        Field::ScenarioAction,
        Field::ScenarioExplanation,
        Field::AnswerToOwnQuestion,
    ];

    /// The four percentage inputs of the energy distribution question.
    pub const ENERGY_ASPECTS: [Field; 4] = [
        Field::EnergyAspect1,
        Field::EnergyAspect2,
        Field::EnergyAspect3,
        Field::EnergyAspect4,
    ];

    /// The wire name of the field (camelCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::IdentityDocument => "identityDocument",
            Field::BirthDate => "birthDate",
            Field::BirthPlace => "birthPlace",
            Field::Email => "email",
            Field::City => "city",
            Field::Country => "country",
            Field::PhoneNumber => "phoneNumber",
            Field::PhoneCountryCode => "phoneCountryCode",
            Field::School => "school",
            Field::Degree => "degree",
            Field::Company => "company",
            Field::Position => "position",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::ImmediateLeader => "immediateLeader",
            Field::MainResponsibilities => "mainResponsibilities",
            Field::Achievements => "achievements",
            Field::WhyCloseCycle => "whyCloseCycle",
            Field::EnglishLevel => "englishLevel",
            Field::EnglishLearningPlace => "englishLearningPlace",
            Field::OtherLanguage => "otherLanguage",
            Field::OtherLanguageLevel => "otherLanguageLevel",
            Field::PreferredName => "preferredName",
            Field::SuperpowerAndKryptonite => "superpowerAndKryptonite",
            Field::WhatCaughtAttention => "whatCaughtAttention",
            Field::UniqueWorkStyle => "uniqueWorkStyle",
            Field::QuestionForCandidates => "questionForCandidates",
            Field::EnergyAspect1 => "energyAspect1",
            Field::EnergyAspect2 => "energyAspect2",
            Field::EnergyAspect3 => "energyAspect3",
            Field::EnergyAspect4 => "energyAspect4",
            Field::ScenarioAction => "scenarioAction",
            Field::ScenarioExplanation => "scenarioExplanation",
            Field::AnswerToOwnQuestion => "answerToOwnQuestion",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .find(|f| f.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownFieldName(s.to_string()))
    }
}
