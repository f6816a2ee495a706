//! Ticker error types

use thiserror::Error;

/// Errors that can occur while fetching or exporting prices.
///
/// Fetch-side errors never escape the [`PriceFetcher`](crate::fetch::PriceFetcher);
/// they are folded into a per-symbol [`FetchOutcome`](crate::types::FetchOutcome)
/// after retries are exhausted.
#[derive(Error, Debug)]
pub enum TickerError {
    /// Network or protocol error from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {status} for {symbol}")]
    Status { symbol: String, status: u16 },

    /// Upstream answered 200 but the body carried no last-traded price
    #[error("no lastPrice")]
    MissingPrice,

    /// Connection-level error (used by mock clients and wrappers)
    #[error("Connection error: {0}")]
    Connection(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed output buffer
    #[error("Decode error: {0}")]
    Decode(String),
}
