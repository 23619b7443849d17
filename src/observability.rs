use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize tracing and logging
///
/// `RUST_LOG` takes precedence over the configured level. JSON output is
/// meant for production, pretty output for local development.
pub fn init_observability(logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?,
    }

    tracing::info!(
        service.name = env!("CARGO_PKG_NAME"),
        service.version = env!("CARGO_PKG_VERSION"),
        log.format = ?logging.format,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_init_with_defaults() {
        let result = init_observability(&LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
        });

        assert!(
            result.is_ok(),
            "Observability init should succeed: {:?}",
            result.err()
        );
    }
}
