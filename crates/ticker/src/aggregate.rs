//! Partial-failure aggregation over per-symbol fetch results.

use futures::future;
use tracing::info;

use crate::fetch::PriceFetcher;
use crate::types::FetchOutcome;

/// Per-symbol outcomes in request order, plus the derived all-failed flag.
///
/// Created fresh per request and discarded once the response is written;
/// nothing here is cached across requests.
#[derive(Debug, Clone, Default)]
pub struct AggregatedPrices {
    results: Vec<FetchOutcome>,
}

impl AggregatedPrices {
    pub fn from_results(results: Vec<FetchOutcome>) -> Self {
        Self { results }
    }

    /// Outcomes in the order the symbols were requested.
    pub fn results(&self) -> &[FetchOutcome] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// True iff every fetch failed. An empty request is vacuously
    /// all-succeeded, so this stays false for it.
    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(FetchOutcome::is_failure)
    }
}

/// Fetch every requested symbol and combine the outcomes.
///
/// Fetches run concurrently; each symbol's retry loop is independent and no
/// shared state is written during the fan-out, so ordering only matters when
/// the results are collected back into request order. Retry policy lives
/// entirely in the fetcher; this is a pure combinator over resolved outcomes.
pub async fn collect_prices(symbols: &[String], fetcher: &PriceFetcher) -> AggregatedPrices {
    let results = future::join_all(symbols.iter().map(|s| fetcher.fetch(s))).await;

    let aggregated = AggregatedPrices::from_results(results);
    info!(
        symbols = symbols.len(),
        failures = aggregated.failure_count(),
        "Aggregated upstream prices"
    );

    aggregated
}
