//! Intake module - the five-step candidate form.
//!
//! `FormSession` is the aggregate root; everything else here is either
//! static description (fields, schema, conditional rules) or a value the
//! session hands back (step state, outcomes, the aggregate record).

mod conditional;
mod field;
#[cfg(test)]
pub(crate) mod fixtures;
mod outcome;
mod record;
mod schema;
mod session;
mod step_state;

pub use conditional::{ConditionalRule, ConditionalRuleEngine, Requirement};
pub use field::{Field, UnknownFieldName};
pub use outcome::{StepErrors, StepOutcome};
pub use record::UserRecord;
pub use schema::{
    FieldSpec, IntakeSchema, StepDefinition, LANGUAGE_LEVELS, RESIDENCE_COUNTRIES,
    SCENARIO_ACTIONS,
};
pub use session::FormSession;
pub use step_state::StepState;
