//! Shared fixtures for the taskrank integration tests: task builders, an
//! in-process scoring gateway and tracing setup.

pub mod builders;
pub mod fake_gateway;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

/// Upper bound for any single async step in a test.
const STEP_TIMEOUT: Duration = Duration::from_secs(5);

/// Install a test-writer subscriber once per test binary.
///
/// Output is captured by the harness and only shown for failing tests.
/// `RUST_LOG` overrides the default filter, which keeps taskrank's own
/// events at `debug` and everything else at `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,taskrank=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if it takes longer than [`STEP_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(STEP_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("async step did not finish within {STEP_TIMEOUT:?}"),
    }
}
