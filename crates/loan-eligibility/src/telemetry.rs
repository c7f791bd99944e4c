//! Tracing bootstrap for the screening service.
//!
//! `RUST_LOG` always wins when set; otherwise the `APP_LOG_LEVEL` directive
//! from [`TelemetryConfig`] is used, either as a plain level (`info`) or as
//! full filter syntax (`loan_eligibility=debug,info`).

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { value: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { value, .. } => {
                write!(f, "cannot parse log filter directive '{value}'")
            }
            TelemetryError::Init(err) => {
                write!(f, "failed to install tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Install the process-wide subscriber. Output is compact and plain so the
/// ingest and registry log lines stay grep-friendly in batch-upload logs.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

fn env_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
        value: directive.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn accepts_plain_level_directives() {
        env::remove_var("RUST_LOG");
        assert!(env_filter("debug").is_ok());
        assert!(env_filter("loan_eligibility=debug,info").is_ok());
    }

    #[test]
    fn rejects_malformed_filter_directives() {
        env::remove_var("RUST_LOG");
        let err = env_filter("loan_eligibility=notalevel").expect_err("directive is invalid");
        assert!(matches!(err, TelemetryError::Filter { .. }));
        assert!(err.to_string().contains("loan_eligibility=notalevel"));
    }
}
