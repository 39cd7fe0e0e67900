use log::LevelFilter;

/// Install the global logger.
///
/// `RUST_LOG` wins when set; otherwise the level follows `--quiet` /
/// `--verbose`, defaulting to info.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = level_for(quiet, verbose);
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.parse_default_env();
    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}
