//! Logging utilities and initialization for BerryLink

use anyhow::Result;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initialize stderr logging for the BerryLink CLI
pub fn init_cli_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = level_for(quiet, verbose);

    Builder::from_default_env()
        .target(Target::Stderr)
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    // Initialize panic logging
    #[cfg(debug_assertions)]
    log_panics::init();

    log::debug!("berrylink logging initialized with level: {:?}", level);
    Ok(())
}

/// Map the -q/-v flags onto a log level
pub fn level_for(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_selection() {
        assert_eq!(level_for(true, 0), LevelFilter::Error);
        assert_eq!(level_for(true, 3), LevelFilter::Error);
        assert_eq!(level_for(false, 0), LevelFilter::Info);
        assert_eq!(level_for(false, 1), LevelFilter::Debug);
        assert_eq!(level_for(false, 2), LevelFilter::Trace);
    }
}
