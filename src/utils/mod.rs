//! Utility modules for common functionality.
//!
//! - amount: fixed-point conversions between raw counters and coin figures
//! - http: retrying HTTP client construction
//! - logging: Logging utilities
//! - metrics: Prometheus registry and RPC metrics
//! - tests: builders shared by unit and integration tests

pub mod amount;
pub mod http;
pub mod logging;
pub mod metrics;
