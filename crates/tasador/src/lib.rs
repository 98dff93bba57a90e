//! Reference-data distribution for property valuation intake.
//!
//! The catalog half publishes the fixed enumerations a property form selects
//! from; the intake half fetches them at session start, validates submissions
//! against them, and forwards well-formed records to a valuation collaborator.

pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
pub mod valuation;
