use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the computed log filter
pub const LOG_ENV: &str = "ARCGRAPH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "precompute");
/// // Or with additional fields:
/// trace_time!(start, "precompute", pairs = table.len());
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

/// Filter directive for the given CLI arguments
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("arcgraph={}", level),
        (true, None) => "arcgraph=debug".to_string(),
        (false, None) => "arcgraph=warn".to_string(),
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    init_with_directive(&filter_directive(verbose, log_level), log_json)
}

fn init_with_directive(directive: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // ARCGRAPH_LOG wins over the CLI-derived level
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));

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
