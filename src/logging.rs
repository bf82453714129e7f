//=========================================================================
// Logging
//=========================================================================
//
// Installs `env_logger` as the backend for the `log` facade.
//
// The library itself only emits through `log`; binaries and demos call
// one of these once at start-up. `RUST_LOG` overrides the default filter.
//
//=========================================================================

use log::LevelFilter;

/// Installs the logger with an `info` default filter.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init() {
    init_with_level(LevelFilter::Info);
}

/// Installs the logger, using `level` when `RUST_LOG` is unset.
pub fn init_with_level(level: LevelFilter) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.to_string()),
    )
    .format_timestamp_millis()
    .try_init();
}
