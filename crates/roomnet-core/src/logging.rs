//! Structured logging setup
//!
//! The library only emits `tracing` events; embedding applications decide
//! whether to install a subscriber through [`init_tracing`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "dijkstra");
/// // Or with additional fields:
/// trace_time!(start, "dijkstra", visited = count);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "ROOMNET_LOG";

/// Initialize structured logging for an embedding application.
///
/// Filter precedence: `RUST_LOG`, then `ROOMNET_LOG`, then `log_level`,
/// then `verbose`. Fails if the directive does not parse or a global
/// subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = resolve_directive(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        std::env::var(LOG_ENV).ok(),
        default_directive(verbose, log_level),
    );
    init_with_filter(&directive, log_json)
}

/// Directive used when neither environment variable is set
fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) => filter_directive(level),
        (true, None) => filter_directive("debug"),
        (false, None) => filter_directive("warn"),
    }
}

/// First non-blank of `RUST_LOG` and `ROOMNET_LOG`, else the fallback
fn resolve_directive(
    rust_log: Option<String>,
    roomnet_log: Option<String>,
    fallback: String,
) -> String {
    rust_log
        .into_iter()
        .chain(roomnet_log)
        .find(|directive| !directive.trim().is_empty())
        .unwrap_or(fallback)
}

/// Resolve the filter directive for a level or a full directive string
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("roomnet_core={}", level)
    }
}

fn init_with_filter(directive: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(directive)?;

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_bare_level() {
        assert_eq!(filter_directive("debug"), "roomnet_core=debug");
    }

    #[test]
    fn test_filter_directive_passthrough() {
        assert_eq!(filter_directive("roomnet_core=trace"), "roomnet_core=trace");
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "roomnet_core=warn");
        assert_eq!(default_directive(true, None), "roomnet_core=debug");
        assert_eq!(default_directive(true, Some("trace")), "roomnet_core=trace");
        assert_eq!(
            default_directive(false, Some("roomnet_core=info,rand=off")),
            "roomnet_core=info,rand=off"
        );
    }

    #[test]
    fn test_rust_log_wins_over_roomnet_log() {
        let directive = resolve_directive(
            Some("roomnet_core=trace".to_string()),
            Some("roomnet_core=info".to_string()),
            "roomnet_core=warn".to_string(),
        );
        assert_eq!(directive, "roomnet_core=trace");
    }

    #[test]
    fn test_roomnet_log_wins_over_level() {
        let directive = resolve_directive(
            None,
            Some("roomnet_core=info".to_string()),
            default_directive(true, Some("trace")),
        );
        assert_eq!(directive, "roomnet_core=info");
    }

    #[test]
    fn test_blank_env_falls_through() {
        let directive = resolve_directive(
            Some("  ".to_string()),
            None,
            default_directive(true, None),
        );
        assert_eq!(directive, "roomnet_core=debug");
    }
}
