// SPDX-License-Identifier: MIT OR Apache-2.0
//! Diagnostic logging for the CLI.
//!
//! Output goes to stderr so it never mixes with JSON written to stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` when
/// `verbose` is true. Calling this twice is harmless; the second call is
/// ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
