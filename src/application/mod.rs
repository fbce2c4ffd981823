//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod answers;
pub mod country_lookup;
pub mod handlers;

pub use answers::{AnswerSheet, AnswerSheetError};
pub use country_lookup::{CountryLookup, DialCodeList, DialCodeSource};
pub use handlers::{
    FinalSubmitHandler, FinalSubmitResult, ResetIntakeHandler, ResetIntakeResult, SaveStatus,
    StartIntakeCommand, StartIntakeHandler, StartIntakeResult, SubmitStepCommand,
    SubmitStepHandler, SubmitStepResult,
};
