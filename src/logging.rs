// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so they never mix with anything a launched command
//! might print. `RUST_LOG` takes precedence over the configured level.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Builds the filter used by [`init`].
///
/// Falls back to `fallback_level` when `RUST_LOG` is unset or unparsable, and to
/// `info` when `fallback_level` itself is not a valid directive.
#[must_use]
pub fn env_filter(fallback_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Installs the global stderr subscriber.
pub fn init(fallback_level: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
