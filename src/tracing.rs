//! Diagnostics for the `tally` binary.
//!
//! Command outcomes go to stdout, so diagnostics stay on stderr. Set
//! `RUST_LOG` to see how a command was resolved, e.g.
//! `RUST_LOG=tally::scan=trace tally function-next foo.cpp`.
//!
//! Every run also appends to a daily `tally.log` under the logs directory
//! from [`crate::config_paths::logs_dir`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "tally.log";

/// Install the stderr and log-file subscribers. Call once from `main`.
///
/// When the logs directory cannot be created the run continues with stderr
/// output only.
pub fn init() {
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .with_filter(stderr_filter);

    let log_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("tally: file logging disabled: {}", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
                .with_ansi(false)
                .with_line_number(true)
                .with_filter(EnvFilter::new("tally=debug"))
        });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(log_layer)
        .init();
}
