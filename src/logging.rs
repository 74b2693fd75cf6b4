//! Diagnostic logging on stderr.
//!
//! Progress lines (`Processed: ...`, the summary) are plain stdout output and
//! are not affected by anything here. This only controls the `log` records
//! emitted along the way.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the `-v` count to a default filter directive.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the stderr subscriber. `log` records are bridged into it.
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
    {
        eprintln!("Failed to initialise logging: {e}");
    }
}
