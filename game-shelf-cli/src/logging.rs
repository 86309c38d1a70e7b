//! Logger setup for terminal output.
//!
//! All user-facing output goes through the `log` macros. Normal runs print
//! bare messages; `--verbose` adds timestamps and levels.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Environment variable with an `env_logger` filter that overrides the flags.
pub(crate) const LOG_ENV_VAR: &str = "GAME_SHELF_LOG";

pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .parse_env(LOG_ENV_VAR)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    // Only fails if a logger is already installed.
    let _ = builder.try_init();
}
