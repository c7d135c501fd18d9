//! Application Runner Module
//!
//! Shared setup for the binary entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shared application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
}

impl AppConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Install the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence over the flags in `config`.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(AppConfig::default().default_filter(), "warn");
        let debug = AppConfig {
            debug: true,
            verbose: false,
        };
        assert_eq!(debug.default_filter(), "debug");
        let verbose = AppConfig {
            debug: true,
            verbose: true,
        };
        assert_eq!(verbose.default_filter(), "trace");
    }
}
