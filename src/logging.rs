use log::LevelFilter;

/// Install the stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output when `verbose` is set.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(default_level);
    builder.parse_default_env();

    // A logger may already be installed (e.g. by a test harness).
    let _ = builder.try_init();
}
