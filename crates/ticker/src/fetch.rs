//! Per-symbol price fetching with bounded retry.

use observability::GatewayMetrics;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::client::TickerClient;
use crate::error::TickerError;
use crate::types::FetchOutcome;

/// Bounded retry: a fixed number of additional attempts with a fixed
/// inter-attempt delay. No exponential growth, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure.
    pub retries: u32,
    /// Delay between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    /// Total number of attempts, including the first.
    pub fn attempts(&self) -> u32 {
        self.retries + 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 2,
            delay: Duration::from_millis(200),
        }
    }
}

/// Fetches one symbol's price from the upstream client, applying the retry
/// policy and folding every failure into a [`FetchOutcome`].
///
/// `fetch` never returns an error: exhausted retries become
/// [`FetchOutcome::Failed`] carrying the last observed error message. Symbols
/// are independent; no symbol's outcome affects another's.
pub struct PriceFetcher {
    client: Arc<dyn TickerClient>,
    policy: RetryPolicy,
    metrics: GatewayMetrics,
}

impl PriceFetcher {
    pub fn new(client: Arc<dyn TickerClient>, policy: RetryPolicy) -> Self {
        Self {
            client,
            policy,
            metrics: GatewayMetrics::new(),
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Fetch one symbol, retrying up to `policy.retries` additional times.
    pub async fn fetch(&self, symbol: &str) -> FetchOutcome {
        let started = Instant::now();
        let mut last_error = String::from("unknown error");

        for attempt in 1..=self.policy.attempts() {
            self.metrics.record_fetch_attempt();

            match self.attempt(symbol).await {
                Ok(outcome) => {
                    debug!(symbol, attempt, "Upstream fetch succeeded");
                    self.metrics.record_fetch_duration(started.elapsed());
                    return outcome;
                }
                Err(e) => {
                    last_error = e.to_string();
                    warn!(
                        symbol,
                        attempt,
                        error = %last_error,
                        "Upstream fetch failed"
                    );
                    self.metrics.record_fetch_failure();
                }
            }

            if attempt < self.policy.attempts() {
                tokio::time::sleep(self.policy.delay).await;
            }
        }

        self.metrics.record_fetch_duration(started.elapsed());
        FetchOutcome::Failed {
            symbol: symbol.to_string(),
            error: last_error,
        }
    }

    /// One upstream call; a body without `lastPrice` counts as a failure.
    async fn attempt(&self, symbol: &str) -> Result<FetchOutcome, TickerError> {
        let ticker = self.client.ticker_24hr(symbol).await?;
        let ts = ticker.timestamp();

        match ticker.last_price {
            Some(price) => Ok(FetchOutcome::Price {
                symbol: symbol.to_string(),
                price,
                ts,
            }),
            None => Err(TickerError::MissingPrice),
        }
    }
}
