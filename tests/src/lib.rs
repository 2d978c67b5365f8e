//! # Light-Node Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Cross-crate flows under real threads and runtimes
//! └── benches/           # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ln-tests
//! cargo test -p ln-tests integration::requests_registry_flows
//! cargo bench -p ln-tests
//! ```

pub mod integration;

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install the test log subscriber once per test binary.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = node_telemetry::TelemetryConfig::for_testing();
        if let Err(e) = node_telemetry::init_logging(&config) {
            eprintln!("test logging not installed: {e}");
        }
    });
}
