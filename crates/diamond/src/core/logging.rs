//! Logging infrastructure for diamond generation
//!
//! Structured logging uses the `tracing` crate. The generator emits spans and
//! events; nothing is printed until a subscriber is installed with
//! [`init_logging`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use diamond::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).ok();
//!
//! // Or with custom level and format
//! init_logging(Some("debug"), Some("pretty")).ok();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format (default)
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `DIAMOND_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `DIAMOND_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Fallback filter directive (tracing-subscriber standard)
//!
//! Logs always go to stderr; stdout is reserved for the diamond itself.
//!
//! # Filtering Logs
//!
//! ```bash
//! # Per-row trace events from the layout stage only
//! RUST_LOG="warn,diamond::generator::layout=trace" diamond e
//! ```

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

/// Level used when neither an argument nor the environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Resolve the effective level directive.
///
/// Precedence: explicit argument, `DIAMOND_LOG_LEVEL`, `RUST_LOG`, then
/// [`DEFAULT_LOG_LEVEL`].
pub fn resolve_log_level(level: Option<&str>) -> String {
    level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DIAMOND_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Resolve the effective format: explicit argument, `DIAMOND_LOG_FORMAT`,
/// then compact.
pub fn resolve_log_format(format: Option<&str>) -> Result<LogFormat, String> {
    match format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DIAMOND_LOG_FORMAT").ok())
    {
        Some(name) => LogFormat::from_str(&name),
        None => Ok(LogFormat::Compact),
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional level directive (trace|debug|info|warn|error|off, or
///   any `EnvFilter` directive). See [`resolve_log_level`] for fallbacks.
/// * `format` - Optional log format (compact|pretty|json). If None, uses
///   `DIAMOND_LOG_FORMAT`, or defaults to `compact`.
///
/// # Returns
///
/// Returns an error for an unknown format, or if a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        // The browser console has no format choice and no env filter.
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = EnvFilter::try_new(resolve_log_level(level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let format =
            resolve_log_format(format).map_err(|e| format!("Invalid log format: {}", e))?;

        // Every format writes to stderr; only compact drops spans and locations.
        let base = fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_level(true);
        let layer = match format {
            LogFormat::Compact => base
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .boxed(),
            LogFormat::Pretty => base
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => base
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .json()
                .boxed(),
        };

        Registry::default()
            .with(layer.with_filter(filter))
            .try_init()?;

        Ok(())
    }
}
