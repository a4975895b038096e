//! Log output for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` overrides the level picked from `-q`/`-v`:
//! - `RUST_LOG=slidekit=debug` - controller state changes
//! - `RUST_LOG=slidekit=trace` - every tween step

use crate::config::CliConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter()));

    let layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.verbosity.is_debug())
            .with_ansi(config.color.should_color_stderr())
            .with_filter(filter)
            .boxed()
    };

    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
