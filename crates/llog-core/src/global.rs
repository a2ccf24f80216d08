//! Process-wide default logger
//!
//! A single lazily created [`LineLogger`] (level `Debug`, stdout sink,
//! panicking Fatal) with free functions for every operation, so callers
//! don't have to thread a logger through their code.

use std::fmt;
use std::io::Write;

use once_cell::sync::Lazy;

use crate::level::Level;
use crate::logger::LineLogger;
use crate::sink::Sink;
use crate::termination::Termination;

static LOGGER: Lazy<LineLogger> = Lazy::new(LineLogger::new);

/// The process-wide default logger
pub fn logger() -> &'static LineLogger {
    &LOGGER
}

pub fn set_level(level: Level) {
    logger().set_level(level);
}

pub fn level() -> Level {
    logger().level()
}

pub fn set_output(writer: impl Write + Send + 'static) -> Sink {
    logger().set_output(writer)
}

pub fn reset_output() -> Sink {
    logger().reset_output()
}

pub fn set_termination(termination: Termination) {
    logger().set_termination(termination);
}

pub fn print(message: impl fmt::Display) {
    logger().print(message);
}

pub fn debug(message: impl fmt::Display) {
    logger().debug(message);
}

#[track_caller]
pub fn debug_with_stack(message: impl fmt::Display) {
    logger().debug_with_stack(message);
}

pub fn info(message: impl fmt::Display) {
    logger().info(message);
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    logger().warn(message);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    logger().error(message);
}

#[track_caller]
pub fn err_nil<T, E: fmt::Display>(result: &Result<T, E>) -> bool {
    logger().err_nil(result)
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    logger().fatal(message)
}

#[track_caller]
pub fn fatal_nil<T, E: fmt::Display>(result: &Result<T, E>) -> bool {
    logger().fatal_nil(result)
}

/// Logging macros for the default logger
#[macro_export]
macro_rules! print_log {
    ($($arg:tt)*) => {
        $crate::global::print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::global::debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_stack_log {
    ($($arg:tt)*) => {
        $crate::global::debug_with_stack(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::global::info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::global::warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::global::error(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! fatal_log {
    ($($arg:tt)*) => {
        $crate::global::fatal(format_args!($($arg)*))
    };
}

/// Logging macros for an explicit logger
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug_stack {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_with_stack(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use std::panic::catch_unwind;

    // The default logger is shared by the whole test binary, so everything
    // touching it lives in this one test.
    #[test]
    fn test_default_logger() {
        let sink = BufferSink::new();
        let _stdout = set_output(sink.clone());
        assert_eq!(level(), Level::Debug);

        print_log!("Testing");
        debug_log!("Testing {}", 1);
        debug_stack_log!("Testing");
        info_log!("Testing");
        warn_log!("Testing");
        let line = line!() - 1;
        error_log!("Testing {}", "err");
        assert_eq!(sink.lines().len(), 6);
        assert!(sink.contents().contains(&format!("global.rs:{line}\x1b[0m")));
        assert!(sink.contents().contains("Testing 1"));
        assert!(sink.contents().contains("Testing err"));

        sink.clear();
        set_level(Level::Error);
        info("dropped");
        warn("dropped");
        let failed: Result<(), &str> = Err("error test");
        assert!(err_nil(&failed));
        assert!(!err_nil(&Ok::<(), &str>(())));
        assert_eq!(sink.lines().len(), 1);

        sink.clear();
        let payload = catch_unwind(|| fatal_log!("boom {}", 42)).expect_err("fatal returned");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom 42"));
        assert!(!fatal_nil(&Ok::<(), &str>(())));
        assert!(catch_unwind(|| fatal_nil(&failed)).is_err());
        assert_eq!(sink.lines().len(), 2);

        set_termination(Termination::Panic);
        set_level(Level::Debug);
        reset_output();
    }

    #[test]
    fn test_explicit_logger_macros() {
        let sink = BufferSink::new();
        let logger = LineLogger::new().with_output(sink.clone());

        log_print!(logger, "p {}", 1);
        log_debug!(logger, "d {}", 2);
        log_debug_stack!(logger, "ds {}", 3);
        log_info!(logger, "i {}", 4);
        log_warn!(logger, "w {}", 5);
        log_error!(logger, "e {}", 6);

        let lines = sink.lines();
        assert_eq!(lines.len(), 6);
        for (line, expected) in lines.iter().zip(["p 1", "d 2", "ds 3", "i 4", "w 5", "e 6"]) {
            assert!(line.contains(expected), "{line:?}");
        }

        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            log_fatal!(logger, "f {}", 7)
        }))
        .expect_err("fatal returned");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("f 7"));
    }
}
