//! Core domain types for the price pipeline.

use serde::Deserialize;

/// Result of fetching one symbol, after retries are exhausted.
///
/// A tagged variant rather than a bag of optionals: downstream code cannot
/// read a price out of a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Last-traded price and its timestamp (epoch milliseconds)
    Price {
        symbol: String,
        price: String,
        ts: Option<i64>,
    },
    /// All attempts failed; carries the last observed error message
    Failed { symbol: String, error: String },
}

impl FetchOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            Self::Price { symbol, .. } | Self::Failed { symbol, .. } => symbol,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Subset of the upstream 24hr ticker payload that the gateway reads.
///
/// Every field is optional; a response without `lastPrice` is treated as a
/// fetch failure by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hr {
    #[serde(default)]
    pub last_price: Option<String>,
    #[serde(default)]
    pub close_time: Option<i64>,
    #[serde(default)]
    pub open_time: Option<i64>,
}

impl Ticker24hr {
    /// Close time, falling back to open time. A zero close time counts as
    /// absent (the upstream reports 0 when no trade closed the window).
    pub fn timestamp(&self) -> Option<i64> {
        self.close_time
            .filter(|t| *t != 0)
            .or(self.open_time)
    }
}
