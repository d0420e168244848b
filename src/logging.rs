//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! The default level is `warn`; `-v` raises it to `debug`. `RUST_LOG`
//! always wins when set:
//!
//! ```bash
//! RUST_LOG=keyseek::core=trace keyseek search src/App.vue
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "keyseek=debug" } else { "warn" }
}

/// Initialize logging. Only the first call has any effect.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_directive(verbose))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .with_filter(filter);

        // Another subscriber may already be installed (e.g. by a host
        // embedding the library); keep that one.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
