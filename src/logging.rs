// File: src/logging.rs
use std::io::Write as _;

use log::{Level, LevelFilter, SetLoggerError};
use pretty_env_logger::env_logger;

const CRATE_TARGET: &str = "affinity_core";

/// Installs the global logger: engine messages at `info` unless `RUST_LOG`
/// says otherwise, everything else at `warn`.
///
/// Fails if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(CRATE_TARGET, LevelFilter::Info)
        .parse_default_env();

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style
            .set_color(level_color(record.level()))
            .set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            short_target(record.target()),
            record.args()
        )
    });

    builder.try_init()
}

fn level_color(level: Level) -> env_logger::fmt::Color {
    match level {
        Level::Error => env_logger::fmt::Color::Red,
        Level::Warn => env_logger::fmt::Color::Yellow,
        Level::Info => env_logger::fmt::Color::Green,
        Level::Debug => env_logger::fmt::Color::Blue,
        Level::Trace => env_logger::fmt::Color::Magenta,
    }
}

/// `affinity_core::core::engine` -> `core::engine`; other targets unchanged.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE_TARGET)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}
