use crate::core::classify::{digits, is_armstrong};
use crate::domain::model::FactOutcome;
use crate::domain::ports::FactProvider;
use crate::utils::error::ClassifyError;
use std::time::Duration;

/// Locally generated fact used whenever the provider cannot answer.
pub fn fallback_fact(n: i64) -> String {
    if is_armstrong(n) {
        let digits = digits(n);
        let power = digits.len();
        let calculation = digits
            .iter()
            .map(|d| format!("{}^{}", d, power))
            .collect::<Vec<_>>()
            .join(" + ");
        return format!("{} is an Armstrong number because {} = {}", n, calculation, n);
    }
    format!("{} is an interesting number with various mathematical properties.", n)
}

/// Ask the provider for a fact, waiting at most `timeout`.
///
/// Never fails: timeouts, transport errors, bad statuses and empty bodies
/// all resolve to [`fallback_fact`]. On timeout the in-flight request is
/// dropped. No retries.
pub async fn fetch_fact_with_fallback(
    provider: &dyn FactProvider,
    n: i64,
    timeout: Duration,
) -> FactOutcome {
    let result = match tokio::time::timeout(timeout, provider.fetch_fact(n)).await {
        Ok(result) => result,
        Err(_) => Err(ClassifyError::FactTimeout {
            timeout_ms: timeout.as_millis() as u64,
        }),
    };

    match result {
        Ok(text) if !text.trim().is_empty() => {
            tracing::debug!(number = n, "Fetched fun fact from provider");
            FactOutcome::Fetched(text)
        }
        Ok(_) => {
            tracing::warn!(number = n, "{}, using fallback", ClassifyError::EmptyFact);
            FactOutcome::Fallback(fallback_fact(n))
        }
        Err(e) => {
            tracing::warn!(number = n, "Fact provider unavailable: {}, using fallback", e);
            FactOutcome::Fallback(fallback_fact(n))
        }
    }
}
