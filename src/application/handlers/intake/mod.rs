//! Intake command handlers.

mod final_submit;
mod reset_intake;
mod start_intake;
mod submit_step;

pub use final_submit::{FinalSubmitHandler, FinalSubmitResult};
pub use reset_intake::{ResetIntakeHandler, ResetIntakeResult};
pub use start_intake::{StartIntakeCommand, StartIntakeHandler, StartIntakeResult};
pub use submit_step::{SaveStatus, SubmitStepCommand, SubmitStepHandler, SubmitStepResult};
