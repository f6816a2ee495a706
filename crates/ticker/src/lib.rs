//! Price aggregation pipeline for PriceGate.
//!
//! Request flow: resolve the caller's symbol list, fetch each symbol from the
//! upstream ticker service with bounded retry, fold per-symbol failures into
//! data, then project the aggregate as JSON or CSV.

pub mod aggregate;
pub mod api;
pub mod client;
pub mod error;
pub mod export;
pub mod fetch;
pub mod symbols;
pub mod types;

pub use aggregate::{collect_prices, AggregatedPrices};
pub use client::{BinanceFuturesClient, MockTickerClient, TickerClient, TickerResult};
pub use error::TickerError;
pub use export::{to_csv, to_json};
pub use fetch::{PriceFetcher, RetryPolicy};
pub use symbols::resolve_symbols;
pub use types::{FetchOutcome, Ticker24hr};
