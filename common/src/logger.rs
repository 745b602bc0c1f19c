use std::fmt;
use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!(
            "{}",
            format_line(&timestamp, self.prefix.as_deref(), level, file, line, message)
        );
    }
}

fn format_line(
    timestamp: &str,
    prefix: Option<&str>,
    level: Level,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!(
            "[{}][{}][{}][{}:{}] {}",
            timestamp, prefix, level, file_name, line, message
        ),
        None => format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message),
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, file!(), line!(), &format!($($arg)*))
    };
}
