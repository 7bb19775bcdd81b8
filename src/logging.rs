//! Log setup for the demo.
//!
//! Stdout carries the report, so logs only go to a file, and only when
//! `WARGCV_LOG` names one.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "WARGCV_LOG";

/// Environment variable holding filter directives; `RUST_LOG` is the fallback.
pub const FILTER_ENV: &str = "WARGCV_LOG_FILTER";

/// Directives used when neither filter variable is set.
pub const DEFAULT_FILTER: &str = "wargcv=info";

/// Pick filter directives: `WARGCV_LOG_FILTER`, then `RUST_LOG`, then the default.
pub fn filter_directives(own: Option<String>, rust_log: Option<String>) -> String {
    let set = |value: Option<String>| value.filter(|d| !d.trim().is_empty());
    set(own)
        .or_else(|| set(rust_log))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let directives = filter_directives(
        std::env::var(FILTER_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring bad log filter {directives:?}: {e}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let file = match std::fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", log_path.to_string_lossy());
            return;
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
        .init();

    tracing::debug!(filter = %directives, "Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_variable_wins() {
        let directives = filter_directives(Some("wargcv=trace".into()), Some("warn".into()));
        assert_eq!(directives, "wargcv=trace");
    }

    #[test]
    fn test_falls_back_to_rust_log() {
        assert_eq!(filter_directives(None, Some("debug".into())), "debug");
    }

    #[test]
    fn test_default_is_scoped_to_demo() {
        assert_eq!(filter_directives(None, None), DEFAULT_FILTER);
        assert_eq!(filter_directives(Some("  ".into()), None), DEFAULT_FILTER);
        assert_eq!(filter_directives(Some("".into()), Some("warn".into())), "warn");
    }
}
