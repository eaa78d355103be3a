use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the browser console
///
/// The last segment of the record's target (the module it came from) is used
/// as the component tag, e.g. `[INFO] use_location_form: ...`.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record);
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Calling it twice keeps the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), component(record.target()), record.args())
}

fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_is_last_module_segment() {
        assert_eq!(component("location_picker_frontend::hooks::use_location_form"), "use_location_form");
        assert_eq!(component("main"), "main");
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("Fetched {} locations", 3))
                .level(Level::Debug)
                .target("location_picker_frontend::services::location_search")
                .build(),
        );
        assert_eq!(line, "[DEBUG] location_search: Fetched 3 locations");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logging_to_console() {
        init(LevelFilter::Debug);
        log::info!("console logger installed");
        log::debug!("debug records reach the console too");
    }
}
