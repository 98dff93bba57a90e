//! Form intake: raw submissions, explicit validation against the session
//! catalog, and the pipeline that forwards well-formed records for valuation.

pub mod form;
pub mod record;
pub mod service;
pub mod validation;

pub use form::{FormField, PropertyForm};
pub use record::{Placeholder, PropertyRecord};
pub use service::{PropertySubmissionService, SubmissionError, SubmissionOutcome};
pub use validation::{assemble_record, FieldViolation, ValidationError, ViolationReason};
