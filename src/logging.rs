//! Logger initialization.
//!
//! Logs go to stderr through `env_logger`; stdout is reserved for the report.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger.
///
/// `RUST_LOG` is read first, then `level` overrides the global default and
/// any `poi_lookup=...` directive from the environment. HTTP client
/// internals are capped at `warn` so `--log-level debug` shows our requests
/// without ureq's connection chatter.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = Builder::from_default_env();
    apply_level(&mut builder, level);
    builder.format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    });
    // try_init so tests can call this more than once
    builder.try_init()
}

/// Layer the CLI level over whatever directives `builder` already holds.
///
/// `filter_level` only sets the default; a module directive parsed from
/// `RUST_LOG` would still win for that module, so ours are set explicitly.
fn apply_level(builder: &mut Builder, level: LevelFilter) {
    builder.filter_level(level);
    builder.filter_module("ureq", level.min(LevelFilter::Warn));
    builder.filter_module("rustls", level.min(LevelFilter::Warn));
    builder.filter_module("poi_lookup", level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_level_overrides_env_directives() {
        let mut builder = Builder::new();
        builder.parse_filters("poi_lookup=trace,other=trace");
        apply_level(&mut builder, LevelFilter::Info);
        let logger = builder.build();

        assert!(enabled(&logger, "poi_lookup::poi::client", Level::Info));
        assert!(!enabled(&logger, "poi_lookup::poi::client", Level::Debug));
        // unrelated modules keep what RUST_LOG asked for
        assert!(enabled(&logger, "other", Level::Trace));
    }

    #[test]
    fn test_http_internals_capped_at_warn() {
        let mut builder = Builder::new();
        apply_level(&mut builder, LevelFilter::Debug);
        let logger = builder.build();

        assert!(enabled(&logger, "poi_lookup::poi::redirect", Level::Debug));
        assert!(enabled(&logger, "ureq::unit", Level::Warn));
        assert!(!enabled(&logger, "ureq::unit", Level::Debug));
        assert!(!enabled(&logger, "rustls::client", Level::Info));
    }

    #[test]
    fn test_off_silences_everything() {
        let mut builder = Builder::new();
        apply_level(&mut builder, LevelFilter::Off);
        let logger = builder.build();

        assert!(!enabled(&logger, "poi_lookup", Level::Error));
        assert!(!enabled(&logger, "ureq", Level::Error));
    }
}
