use log::{LevelFilter, Metadata, Record};

/// Writes log records to stderr, keeping stdout for the results.
struct RunnerLogger;

impl log::Log for RunnerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: RunnerLogger = RunnerLogger;

/// Installs the logger.
///
/// # Panics
///
/// If a logger was already installed.
pub fn init(level: LevelFilter) {
    let logger_init_result = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));

    if let Err(err) = logger_init_result {
        panic!("Error with initializing logger: {}", err);
    }
}
