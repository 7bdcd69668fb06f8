use anyhow::Result;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

/// Minimal timestamped sink for the `log` facade, writing to stderr so game
/// output on stdout stays clean.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!("{} - {} - {}", timestamp, record.level(), record.args());
    }

    fn flush(&self) {}
}

pub fn init(filter: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(filter);
    Ok(())
}
