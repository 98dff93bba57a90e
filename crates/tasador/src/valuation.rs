use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::intake::record::PropertyRecord;

/// Estimate returned for one submitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationEstimate {
    pub estimated_price: f64,
    pub currency: String,
}

/// Collaborator abstraction so the intake pipeline can run against any
/// pricing backend. Implementations receive the complete record; what they
/// do with it is their business.
#[async_trait]
pub trait PriceEstimator: Send + Sync {
    async fn estimate(&self, record: &PropertyRecord) -> Result<ValuationEstimate, ValuationError>;
}

/// Error raised when the collaborator cannot produce an estimate.
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    #[error("valuation collaborator unavailable: {0}")]
    Unavailable(String),
}
