//! Tracing and logging setup
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout stays
//! free for command output. `RUST_LOG` takes precedence over the configured
//! directive.

use serde::Deserialize;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

/// Crates that log at debug level in verbose mode
const SIDEBAR_TARGETS: [&str; 4] = [
    "sidebar_core",
    "sidebar_common",
    "sidebar_service",
    "sidebar_preview",
];

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Subscriber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub directive: String,
    pub format: LogFormat,
    /// Emit an event with timings when a span closes
    pub span_timings: bool,
    /// Include source file and line
    pub source_location: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::quiet()
    }
}

impl TracingConfig {
    /// Warnings and errors only
    pub fn quiet() -> Self {
        Self {
            directive: "warn".to_string(),
            format: LogFormat::Compact,
            span_timings: false,
            source_location: false,
        }
    }

    /// Debug output for the sidebar crates, info for everything else
    pub fn verbose() -> Self {
        let directive = SIDEBAR_TARGETS
            .iter()
            .map(|target| format!("{target}=debug"))
            .chain(std::iter::once("info".to_string()))
            .collect::<Vec<_>>()
            .join(",");
        Self {
            directive,
            format: LogFormat::Pretty,
            span_timings: true,
            source_location: true,
        }
    }

    /// Info level JSON lines for log collectors
    pub fn production() -> Self {
        Self {
            directive: "info".to_string(),
            format: LogFormat::Json,
            span_timings: false,
            source_location: false,
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn filter(&self) -> Result<EnvFilter, TracingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.directive)
            .map_err(|e| TracingError::InvalidDirective(self.directive.clone(), e.to_string()))
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.span_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let base = fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(self.source_location)
            .with_line_number(self.source_location)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Pretty => base.pretty().boxed(),
            LogFormat::Compact => base.compact().boxed(),
            LogFormat::Json => base.json().boxed(),
        }
    }
}

/// Install the global subscriber
///
/// # Errors
/// Fails if the directive does not parse or a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let filter = config.filter()?;
    tracing_subscriber::registry()
        .with(config.fmt_layer())
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Invalid log filter {0:?}: {1}")]
    InvalidDirective(String, String),

    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized(#[from] TryInitError),
}
