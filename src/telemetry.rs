//! Module for telemetry functionality such as logging

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the log lines, selected by the `LOG_FORMAT` env variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` selects JSON lines; anything else, or an unset variable, falls back to pretty output.
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Sets up logging. The log level is taken from the `RUST_LOG` env variable (default is `info`).
/// The logging format (pretty/json) is set by the `LOG_FORMAT` env variable.
///
/// Logs always go to stderr: stdout is reserved for the serialized test case in single-file mode.
pub fn setup_logging() -> Result<()> {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match log_format {
        LogFormat::Json => fmt_layer.json().boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    debug!(?log_format, "logging initialised");
    Ok(())
}
