use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::CatalogSession;
use crate::valuation::{PriceEstimator, ValuationError, ValuationEstimate};

use super::form::PropertyForm;
use super::record::PropertyRecord;
use super::validation::{assemble_record, ValidationError};

/// Facade composing the session catalog with the valuation collaborator.
///
/// The session is fixed at construction; each submission is validated against
/// it and, when well-formed, forwarded exactly once. No caching, so repeating
/// a submission asks the collaborator again.
pub struct PropertySubmissionService<E> {
    session: CatalogSession,
    estimator: Arc<E>,
}

impl<E> PropertySubmissionService<E>
where
    E: PriceEstimator + 'static,
{
    pub fn new(session: CatalogSession, estimator: Arc<E>) -> Self {
        Self { session, estimator }
    }

    pub fn session(&self) -> &CatalogSession {
        &self.session
    }

    /// Validate a submission and request an estimate for it.
    pub async fn submit(&self, form: &PropertyForm) -> Result<SubmissionOutcome, SubmissionError> {
        let record = assemble_record(form, &self.session)?;
        let estimate = self.estimator.estimate(&record).await?;

        if estimate.currency != record.operation_currency {
            warn!(
                submitted = %record.operation_currency,
                returned = %estimate.currency,
                "valuation currency differs from the submitted operation currency"
            );
        }

        info!(
            city = %record.city,
            operation = %record.operation_type,
            price = estimate.estimated_price,
            currency = %estimate.currency,
            "submission valued"
        );

        Ok(SubmissionOutcome { record, estimate })
    }
}

/// The accepted record paired with the collaborator's estimate, both returned
/// unmodified for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub record: PropertyRecord,
    pub estimate: ValuationEstimate,
}

/// Error raised by the submission pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}
