use crate::core::classify::{parse_number, NumberProfile};
use crate::core::fact::fetch_fact_with_fallback;
use crate::domain::model::ClassificationResult;
use crate::domain::ports::FactProvider;
use crate::utils::error::{ClassifyError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Stateless request handler behind `/api/classify-number`.
#[derive(Clone)]
pub struct ClassificationService {
    provider: Arc<dyn FactProvider>,
    fact_timeout: Duration,
    profiler: fn(i64) -> NumberProfile,
}

impl ClassificationService {
    pub fn new(provider: Arc<dyn FactProvider>, fact_timeout: Duration) -> Self {
        Self {
            provider,
            fact_timeout,
            profiler: NumberProfile::of,
        }
    }

    /// Replace predicate evaluation, e.g. with one that panics.
    #[cfg(test)]
    pub(crate) fn with_profiler(mut self, profiler: fn(i64) -> NumberProfile) -> Self {
        self.profiler = profiler;
        self
    }

    /// Validate `raw`, then evaluate the predicates and fetch the fact
    /// concurrently. Predicates run on the blocking pool since they are
    /// O(sqrt(n)) for large inputs.
    pub async fn classify(&self, raw: Option<&str>) -> Result<ClassificationResult> {
        let number = parse_number(raw)?;
        tracing::debug!(number, "Classifying number");

        let profiler = self.profiler;
        let profile = tokio::task::spawn_blocking(move || profiler(number));
        let fact = fetch_fact_with_fallback(self.provider.as_ref(), number, self.fact_timeout);
        let (profile, fact) = tokio::join!(profile, fact);

        let profile = profile.map_err(|e| ClassifyError::Internal {
            message: format!("predicate evaluation failed: {}", e),
        })?;

        Ok(ClassificationResult {
            number,
            is_prime: profile.is_prime,
            is_perfect: profile.is_perfect,
            properties: profile.properties,
            digit_sum: profile.digit_sum,
            fun_fact: fact.into_text(),
        })
    }
}
