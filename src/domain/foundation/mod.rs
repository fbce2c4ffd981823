//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, lifecycle statuses and error types
//! that form the vocabulary of the intake domain.

mod errors;
mod ids;
mod state_machine;
mod step_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::SessionId;
pub use state_machine::StateMachine;
pub use step_status::StepStatus;
pub use timestamp::Timestamp;
