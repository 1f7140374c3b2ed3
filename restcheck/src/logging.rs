use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INITIALIZE_LOGGING: Once = Once::new();

/// Installs the fmt subscriber once per process. Filtering follows `RUST_LOG` and
/// defaults to `info`; output goes through the test writer so libtest captures it.
pub fn init() {
    INITIALIZE_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // another subscriber may already be installed by the embedding test binary
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
