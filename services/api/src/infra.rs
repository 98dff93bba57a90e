use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tasador::intake::PropertyRecord;
use tasador::valuation::{PriceEstimator, ValuationError, ValuationEstimate};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in pricing backend: scales the requested operation amount by a
/// fixed uplift and echoes the submitted currency. Not a valuation model.
#[derive(Debug, Clone)]
pub(crate) struct FixedFactorEstimator {
    factor: f64,
}

impl FixedFactorEstimator {
    pub(crate) fn new(factor: f64) -> Self {
        Self { factor }
    }
}

#[async_trait]
impl PriceEstimator for FixedFactorEstimator {
    async fn estimate(&self, record: &PropertyRecord) -> Result<ValuationEstimate, ValuationError> {
        Ok(ValuationEstimate {
            estimated_price: record.operation_amount * self.factor,
            currency: record.operation_currency.clone(),
        })
    }
}
