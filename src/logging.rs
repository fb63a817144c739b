// SPDX-License-Identifier: MPL-2.0
//! Logging system initialization.
//!
//! Logs go to stderr through a `tracing-subscriber` formatter. The level
//! defaults to INFO and can be changed with the `RUST_LOG` environment
//! variable, e.g. `RUST_LOG=petal_grid=debug`.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. GPU crates are noisy at INFO.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_wgpu=warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("PetalGrid v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn second_init_reports_logging_error() {
        let _ = init_logging();
        match init_logging() {
            Err(Error::Logging(_)) => {}
            other => panic!("expected Logging error, got {:?}", other),
        }
    }
}
