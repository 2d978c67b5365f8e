//! # Node Telemetry
//!
//! Logging bootstrap and Prometheus counters shared by the light-node
//! primitives.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use node_telemetry::{init_logging, register_metrics, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! register_metrics()?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LN_SERVICE_NAME` | `light-node` | Service name attached to log lines |
//! | `LN_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `LN_JSON_LOGS` | `false` | Emit JSON formatted logs |
//! | `LN_CONSOLE_OUTPUT` | `true` | Write logs to stdout at all |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, register_metrics, HistogramTimer, REQUESTS_REGISTERED, REQUESTS_REJECTED,
    REQUESTS_UNREGISTERED, SYNC_POLL_DURATION, SYNC_POLL_OUTCOMES,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// A collector could not be registered or encoded.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
