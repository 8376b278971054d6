use std::io::IsTerminal;

use tracing::Level;

/// Max level for the report: decision lines are `info`, failures `error`.
pub const fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Install the stdout subscriber. A second call is a no-op.
///
/// Lines carry only the message; failures spell out their own `ERROR:`
/// prefix. Colors are only used on a terminal.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_level(false)
        .with_target(false)
        .without_time()
        .try_init()
        .ok(); // Ignore error if already initialized
}
