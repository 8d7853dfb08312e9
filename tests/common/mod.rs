use std::sync::Once;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TEST_SETUP: Once = Once::new();

/// Installs a global tracing subscriber once per test binary.
///
/// Level is taken from `RUST_LOG`, default `debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );

        if subscriber.try_init().is_ok() {
            info!("Test setup complete");
        }
    });
}
