use log::LevelFilter;

/// Environment variable that switches on debug logging
pub const DEBUG_ENV: &str = "WORDLE_DEBUG";

/// Initialize logging for the CLI.
///
/// Logs go to stderr so they never interleave with the game board on
/// stdout. `RUST_LOG`, when set, overrides the level chosen here.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let level = if debug_enabled || env::var_os(DEBUG_ENV).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) is harmless
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
