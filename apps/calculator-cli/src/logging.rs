//! Logging setup.
//!
//! `RUST_LOG` takes precedence over the configured level. Events are written
//! to stderr so that stdout only carries results.

use tracing_subscriber::EnvFilter;

use crate::config::{Format, LoggingConfig};

/// Install the global subscriber. Call once at startup.
pub fn init(config: &LoggingConfig) {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.level)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        Format::Text => builder.init(),
        Format::Json => builder.json().init(),
    }
}
