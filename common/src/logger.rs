use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            println!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message);
        } else {
            println!("[{}][{}:{}] {}", timestamp, file_name, line, message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Messages logged before `init_logger` are dropped, so library code and tests
/// can log freely.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

pub fn trace(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get()
        && logger.is_verbose()
    {
        logger.log(file, line, message);
    }
}

pub fn trace_enabled() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

/// Like `log!`, but only printed in verbose mode. The message is not
/// formatted at all otherwise.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::logger::trace_enabled() {
            $crate::logger::trace(file!(), line!(), &format!($($arg)*))
        }
    };
}
