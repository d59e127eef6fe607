use crate::config::TelemetryConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter spec, whether from `RUST_LOG` or config, failed to
    /// parse. Surfaced rather than silently downgraded so a typo in a
    /// deployment manifest is caught at startup.
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the process-wide subscriber. `RUST_LOG` wins over the
/// configured level when both are set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let spec = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    let filter = EnvFilter::try_new(&spec).map_err(|source| TelemetryError::Filter {
        value: spec,
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_filter_spec_is_reported() {
        let config = TelemetryConfig {
            log_level: "info=this=is=not=a=filter".to_string(),
        };
        std::env::remove_var("RUST_LOG");
        let result = init(&config);
        assert!(matches!(result, Err(TelemetryError::Filter { .. })));
    }
}
