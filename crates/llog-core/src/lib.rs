//! llog core
//!
//! A small leveled console logger. Each call writes one line made of a gray
//! timestamp, a colorized level tag, the caller's `file:line` for Warn and
//! above, and the message, to a swappable output sink.
//!
//! ```text
//! 2024/05/01 12:00:00 INFO server started
//! 2024/05/01 12:00:03 WARN src/main.rs:41 disk at 93%
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use llog_core::{log_warn, BufferSink, Level, LineLogger};
//!
//! let sink = BufferSink::new();
//! let logger = LineLogger::new()
//!     .with_level(Level::Info)
//!     .with_output(sink.clone());
//!
//! logger.debug("suppressed");
//! logger.info("server started");
//! log_warn!(logger, "disk at {}%", 93);
//!
//! let result: Result<(), String> = Err("connection reset".into());
//! if logger.err_nil(&result) {
//!     // handled
//! }
//! assert_eq!(sink.lines().len(), 3);
//! ```
//!
//! The [`global`] module holds a process-wide default logger with free
//! functions and `*_log!` macros. [`bridge::init`] installs a logger as the
//! backend of the `log` facade.

pub mod bridge;
pub mod color;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logger;
pub mod sink;
pub mod termination;

pub use color::{level_tag, Color, BOLD, RESET};
pub use error::{LogError, LogResult};
pub use level::Level;
pub use logger::LineLogger;
pub use sink::{BufferSink, Sink};
pub use termination::{Termination, SINK_FAILURE_MESSAGE};
