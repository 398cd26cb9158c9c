//! Forward `log` records to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger and set the max level.
///
/// Returns `false` when a logger was already installed; the level is still
/// applied.
pub fn init(level: LevelFilter) -> bool {
    log::set_max_level(level);
    match log::set_logger(&LOGGER) {
        Ok(()) => true,
        Err(_) => {
            // Another crate may already own the global logger.
            log::debug!("global logger already set; keeping it");
            false
        }
    }
}
