//! Tracing subscriber setup for the command-line binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting JSON log output (`1` or `true`).
pub const TRACE_JSON_ENV: &str = "CPUSCHED_TRACE_JSON";

/// Whether a `CPUSCHED_TRACE_JSON` value enables JSON output.
pub fn json_requested(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

/// Installs the global subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Logs go to stderr so that
/// stdout carries only the results.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = json_requested(std::env::var(TRACE_JSON_ENV).ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = if use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };
}
