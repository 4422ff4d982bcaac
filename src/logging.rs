//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directives used when `--verbose` is set.
pub const VERBOSE_DIRECTIVES: &str = "pipeline_showcase=debug,tower_http=debug,info";

/// Fallback level when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Build the log filter.
///
/// `verbose` wins over `rust_log`; an invalid `rust_log` falls back to `info`.
pub fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_DIRECTIVES);
    }

    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber, plain text or JSON lines.
pub fn init(filter: EnvFilter, json: bool) {
    tracing_subscriber::registry()
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn rust_log_sets_the_level() {
        let filter = env_filter(false, Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_rust_log_defaults_to_info() {
        let filter = env_filter(false, None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn invalid_rust_log_defaults_to_info() {
        let filter = env_filter(false, Some("pipeline_showcase=loud"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn verbose_overrides_rust_log() {
        let filter = env_filter(true, Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
