pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=taskdag=trace cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Titles of a successful schedule, panicking with the cycle otherwise.
pub fn scheduled_titles(tasks: &[taskdag::dag::TaskDescriptor]) -> Vec<String> {
    match taskdag::dag::schedule(tasks) {
        Ok(schedule) => schedule.into_titles(),
        Err(cycle) => panic!("expected a schedule, got {cycle}"),
    }
}
