//! Application handlers.
//!
//! Command handlers that orchestrate session operations and the ports.

pub mod intake;

pub use intake::{
    FinalSubmitHandler, FinalSubmitResult, ResetIntakeHandler, ResetIntakeResult, SaveStatus,
    StartIntakeCommand, StartIntakeHandler, StartIntakeResult, SubmitStepCommand,
    SubmitStepHandler, SubmitStepResult,
};
