//! Candidate Intake - multi-step candidate form model
//!
//! This crate validates a five-step candidate intake form, applies its
//! conditional rules, accumulates completed steps into one record and looks
//! up phone dial codes with a static fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
