//! Logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Resolve the filter directive from the configured level and `-v` count.
///
/// Any `-v` flag takes precedence over the configured level:
/// `-v` info, `-vv` debug, `-vvv` trace.
#[must_use]
pub fn effective_level(cfg: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => cfg.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins over the configured level. Failing to install the
/// subscriber (for example because one is already set) is reported on stderr
/// and otherwise ignored.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let level = effective_level(cfg, verbose);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        let cfg = LoggingConfig {
            level: "error".to_owned(),
            json: false,
        };
        assert_eq!(effective_level(&cfg, 0), "error");
        assert_eq!(effective_level(&cfg, 1), "info");
        assert_eq!(effective_level(&cfg, 2), "debug");
        assert_eq!(effective_level(&cfg, 3), "trace");
        assert_eq!(effective_level(&cfg, 9), "trace");
    }
}
