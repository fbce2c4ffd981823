//! AnswerSheet - a candidate's answers, keyed by step, read from YAML.
//!
//! ```yaml
//! 1:
//!   fullName: Ana María Pérez
//!   email: ana@example.com
//! 4:
//!   energyAspect1: 40
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::intake::Field;
use crate::domain::validation::FieldValue;

/// Errors reading an answer sheet.
#[derive(Debug, Error)]
pub enum AnswerSheetError {
    #[error("failed to read answers file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse answers: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Answers for each step. Steps with no entry submit no values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    steps: BTreeMap<u8, BTreeMap<Field, FieldValue>>,
}

impl AnswerSheet {
    /// Parses a YAML answer sheet.
    pub fn from_yaml(yaml: &str) -> Result<Self, AnswerSheetError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML answer sheet from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnswerSheetError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// The answers for one step, in field order.
    pub fn step(&self, number: u8) -> Vec<(Field, FieldValue)> {
        self.steps
            .get(&number)
            .map(|values| values.iter().map(|(f, v)| (*f, v.clone())).collect())
            .unwrap_or_default()
    }

    /// Step numbers that have answers.
    pub fn step_numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.steps.keys().copied()
    }
}
