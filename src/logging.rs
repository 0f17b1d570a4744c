//! Logging setup.
//!
//! Logs go to stderr so stdout only carries the puzzle answer. `RUST_LOG`
//! takes precedence over the configured level:
//!
//! ```bash
//! RUST_LOG=mirage=trace mirage 9
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn level_rank(directive: &str) -> Option<usize> {
    LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(directive))
}

/// Picks the filter directive from the configured level and the `-v` count.
///
/// Each `-v` raises the global floor: `info`, `debug`, then `trace`. A bare
/// configured level that is already higher is kept, and target directives
/// such as `mirage=debug` are carried over unchanged.
#[must_use]
pub fn effective_level(configured: &str, verbose: u8) -> String {
    let floor = match verbose {
        0 => return configured.to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut global = floor;
    let mut targeted = Vec::new();
    for directive in configured.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match level_rank(directive) {
            Some(rank) if level_rank(global).is_some_and(|current| rank > current) => {
                global = LEVELS[rank];
            }
            Some(_) => {}
            None => targeted.push(directive),
        }
    }

    std::iter::once(global)
        .chain(targeted)
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. Only the first call takes effect.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level_no_verbose() {
        assert_eq!(effective_level("warn", 0), "warn");
        assert_eq!(effective_level("mirage=debug", 0), "mirage=debug");
    }

    #[test]
    fn test_effective_level_raises() {
        assert_eq!(effective_level("warn", 1), "info");
        assert_eq!(effective_level("warn", 2), "debug");
        assert_eq!(effective_level("warn", 3), "trace");
        assert_eq!(effective_level("warn", 9), "trace");
    }

    #[test]
    fn test_effective_level_keeps_higher_config() {
        assert_eq!(effective_level("debug", 1), "debug");
        assert_eq!(effective_level("trace", 2), "trace");
    }

    #[test]
    fn test_effective_level_keeps_target_directives() {
        assert_eq!(effective_level("mirage=debug", 1), "info,mirage=debug");
        assert_eq!(
            effective_level("warn,mirage=trace", 2),
            "debug,mirage=trace"
        );
        assert_eq!(effective_level("TRACE,mirage=info", 1), "trace,mirage=info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("warn");
        init("trace");
    }
}
