//! Prometheus metrics for the light-node primitives.
//!
//! All metrics follow the naming convention: `ln_<component>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // REQUESTS REGISTRY
    // =========================================================================

    /// Requests accepted by the registry
    pub static ref REQUESTS_REGISTERED: IntCounter = IntCounter::new(
        "ln_requests_registered_total",
        "Total number of requests accepted by the requests registry"
    ).expect("metric creation failed");

    /// Requests rejected inside the cooldown window
    pub static ref REQUESTS_REJECTED: IntCounter = IntCounter::new(
        "ln_requests_rejected_total",
        "Total number of duplicate requests rejected within the cooldown window"
    ).expect("metric creation failed");

    /// Requests removed from the registry
    pub static ref REQUESTS_UNREGISTERED: IntCounter = IntCounter::new(
        "ln_requests_unregistered_total",
        "Total number of tracked requests removed from the registry"
    ).expect("metric creation failed");

    // =========================================================================
    // SYNC POLL
    // =========================================================================

    /// Poll outcomes by label: done, failed_to_start, took_too_long
    pub static ref SYNC_POLL_OUTCOMES: IntCounterVec = IntCounterVec::new(
        Opts::new("ln_sync_poll_outcomes_total", "Sync poll runs by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Wall time of a full poll run
    pub static ref SYNC_POLL_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "ln_sync_poll_duration_seconds",
            "Time spent waiting for node synchronization"
        ).buckets(exponential_buckets(0.1, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register all collectors with [`REGISTRY`].
///
/// Safe to call more than once; collectors already registered are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(REQUESTS_REGISTERED.clone()),
        Box::new(REQUESTS_REJECTED.clone()),
        Box::new(REQUESTS_UNREGISTERED.clone()),
        Box::new(SYNC_POLL_OUTCOMES.clone()),
        Box::new(SYNC_POLL_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
