//! Back-office console core.
//!
//! Headless controllers for the commerce back-office admin console. A UI
//! shell injects an [`interaction::Interaction`] and a
//! [`navigation::Navigator`], then drives the per-entity list and form
//! controllers; all remote state sits behind [`api::ApiClient`]. Nothing is
//! cached or persisted locally — every view re-fetches from the back
//! office, and displayed sets are replaced wholesale.

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod api;
pub mod config;
pub mod console;
pub mod controllers;
pub mod interaction;
pub mod lookup;
pub mod models;
pub mod navigation;

pub use console::Console;

// ---------------------------------------------------------------------------
// Field normalisation helpers
// ---------------------------------------------------------------------------

/// Parse a decimal field as typed. Trims first; NaN/infinity never pass.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse an integer field as typed.
pub(crate) fn parse_entero(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Trim an optional text field; blank becomes an explicit absent value so
/// it serialises as `null`, never `""`.
pub(crate) fn clean_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install the global tracing subscriber: env-filtered compact output on
/// stderr, plus a daily-rolling JSON file under `log_dir` when given.
///
/// Returns the file appender guard; dropping it stops the background
/// writer, so callers hold it for the process lifetime. Fails if a
/// subscriber is already installed.
pub fn init_logging(
    log_dir: Option<&std::path::Path>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).compact();
    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "console.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_writer(writer).json();
            registry
                .with(file_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;
            Ok(Some(guard))
        }
        None => {
            registry
                .try_init()
                .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;
            Ok(None)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_accepts_trimmed_numbers_only() {
        assert_eq!(parse_decimal(" 3.50 "), Some(3.5));
        assert_eq!(parse_decimal("0"), Some(0.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("tres"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn parse_entero_rejects_fractions() {
        assert_eq!(parse_entero(" 50 "), Some(50));
        assert_eq!(parse_entero("5.5"), None);
        assert_eq!(parse_entero("x"), None);
    }

    #[test]
    fn clean_opt_maps_blank_to_none() {
        assert_eq!(clean_opt("  99887766 "), Some("99887766".to_string()));
        assert_eq!(clean_opt("   "), None);
        assert_eq!(clean_opt(""), None);
    }
}
