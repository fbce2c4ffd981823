//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, statuses, errors)
//! - `validation` - Field values, rules and failure reasons
//! - `intake` - The five-step form: schema, conditional rules, session aggregate
//! - `country` - Dial code entries, ordering and the phone prefix picker
//! - `dates` - Display formatting for date fields

pub mod country;
pub mod dates;
pub mod foundation;
pub mod intake;
pub mod validation;
