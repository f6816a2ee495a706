//! Observability infrastructure for PriceGate
//!
//! This crate provides:
//! - Structured logging via tracing
//! - Prometheus metrics for the gateway and its upstream fetches

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{init_metrics, GatewayMetrics};
