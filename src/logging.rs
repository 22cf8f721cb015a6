//! Logger setup
//!
//! Log lines go to stderr so they never mix with reports or the summary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map `-v` occurrences to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// `RUST_LOG`, when set, takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_env(Env::default());
    builder.format_timestamp(None);
    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(3);
    }
}
