use std::fmt;
use std::sync::{
    atomic::{AtomicU8, Ordering},
    Mutex, MutexGuard, OnceLock, PoisonError,
};

use clap::ValueEnum;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warning as u8);
static GLOBAL_LOG_SINK: OnceLock<Mutex<Box<dyn LogSink>>> = OnceLock::new();

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn from_u8(val: u8) -> LogLevel {
        match val {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn global_log_level() -> LogLevel {
    LogLevel::from_u8(GLOBAL_LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_global_log_level(level: LogLevel) {
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Whether a message at `level` would currently be written.
///
/// Callers on hot paths check this before building the message.
pub fn enabled(level: LogLevel) -> bool {
    level >= global_log_level()
}

/// Destination for formatted log lines.
pub trait LogSink: Send {
    fn write_line(&mut self, level: LogLevel, line: &str);
}

/// Writes every line to stderr so stdout stays reserved for command output.
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&mut self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

fn global_sink() -> MutexGuard<'static, Box<dyn LogSink>> {
    GLOBAL_LOG_SINK
        .get_or_init(|| Mutex::new(Box::new(StderrSink)))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide sink, returning the previous one.
pub fn set_global_log_sink(sink: Box<dyn LogSink>) -> Box<dyn LogSink> {
    std::mem::replace(&mut *global_sink(), sink)
}

pub fn log(level: LogLevel, target: &str, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }

    let cur_thread = std::thread::current().id();
    let line = format!("[{}] [{:?}] [{}] {}", level, cur_thread, target, args);
    global_sink().write_line(level, &line);
}

#[macro_export]
macro_rules! log_debug {
    ($target:expr, $($arg:tt)+) => {
        $crate::utils::log::log($crate::utils::LogLevel::Debug, $target, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($target:expr, $($arg:tt)+) => {
        $crate::utils::log::log($crate::utils::LogLevel::Info, $target, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($target:expr, $($arg:tt)+) => {
        $crate::utils::log::log($crate::utils::LogLevel::Warning, $target, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($target:expr, $($arg:tt)+) => {
        $crate::utils::log::log($crate::utils::LogLevel::Error, $target, format_args!($($arg)+))
    };
}


#[cfg(test)]
mod tests {
    use super::testing::{MemorySink, LOG_TEST_LOCK};
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert_eq!(LogLevel::from_u8(LogLevel::Info as u8), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    #[test]
    fn filters_below_global_level_and_formats_target() {
        let _guard = LOG_TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let sink = MemorySink::default();
        let previous = set_global_log_sink(Box::new(sink.clone()));
        let previous_level = global_log_level();
        set_global_log_level(LogLevel::Info);

        crate::log_debug!("test", "hidden {}", 1);
        crate::log_info!("test", "shown {}", 2);
        crate::log_error!("test", "also shown");

        set_global_log_level(previous_level);
        set_global_log_sink(previous);

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, LogLevel::Info);
        assert!(lines[0].1.starts_with("[INFO] "));
        assert!(lines[0].1.ends_with("[test] shown 2"));
        assert_eq!(lines[1].0, LogLevel::Error);
    }
}
