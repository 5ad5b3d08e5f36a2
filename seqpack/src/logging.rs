//! Logging setup shared by the seqpack binaries, built on
//! `tracing_subscriber`. Output is either flattened JSON lines or the
//! human friendly pretty format.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// How log events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line, human readable.
    Pretty,
}

/// Installs the global subscriber.
///
/// `directives` is used when `RUST_LOG` is unset or invalid, e.g.
/// `"info,seqpack=debug"`. Fails if a global subscriber is already set.
pub fn setup_logging(directives: &str, format: LogFormat) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    match format {
        LogFormat::Json => {
            let main_layer = tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_target(false)
                .with_current_span(true)
                .with_span_list(true)
                .with_line_number(true)
                .with_file(true)
                .with_timer(UtcTime::rfc_3339());

            tracing_subscriber::registry()
                .with(filter)
                .with(main_layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let main_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_timer(UtcTime::rfc_3339());

            tracing_subscriber::registry()
                .with(filter)
                .with(main_layer)
                .try_init()
        }
    }
}
