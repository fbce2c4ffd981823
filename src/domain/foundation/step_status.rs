//! StepStatus enum for tracking where a form step is in its lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle of a single form step.
///
/// A step is never active and completed at the same time; the session
/// derives the `is_active`/`is_completed` flags from this status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

impl StepStatus {
    /// Returns true if this is the step currently accepting input.
    pub fn is_active(&self) -> bool {
        matches!(self, StepStatus::Active)
    }

    /// Returns true once the step has passed validation.
    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }
}

impl StateMachine for StepStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StepStatus::*;
        matches!((self, target), (Pending, Active) | (Active, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StepStatus::*;
        match self {
            Pending => vec![Active],
            Active => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepStatus::Pending => "Pending",
            StepStatus::Active => "Active",
            StepStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
