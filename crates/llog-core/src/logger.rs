//! Leveled line logger

use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::error::LogResult;
use crate::format::{self, CallSite};
use crate::level::Level;
use crate::sink::{stdout_sink, Sink};
use crate::termination::{Termination, SINK_FAILURE_MESSAGE};

/// A logger that writes one colorized line per call to a swappable sink
///
/// Lines below the minimum level are dropped before anything is formatted.
/// Warn, Error and Fatal lines (and [`LineLogger::debug_with_stack`]) carry
/// the `file:line` of the caller, captured with `#[track_caller]`.
///
/// Messages are anything that implements `Display`. A plain `&str` is used
/// verbatim; use `format_args!` (or the `log_*!` macros) to substitute
/// arguments.
///
/// # Example
///
/// ```
/// use llog_core::{BufferSink, Level, LineLogger};
///
/// let sink = BufferSink::new();
/// let logger = LineLogger::new()
///     .with_level(Level::Warn)
///     .with_output(sink.clone());
///
/// logger.info("dropped");
/// logger.warn(format_args!("disk at {}%", 93));
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct LineLogger {
    level: AtomicU8,
    sink: Mutex<Sink>,
    termination: RwLock<Termination>,
}

impl Default for LineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("level", &self.level())
            .field("termination", &self.termination())
            .finish_non_exhaustive()
    }
}

impl LineLogger {
    /// Create a logger at `Debug` writing to stdout, panicking on Fatal
    pub fn new() -> Self {
        Self {
            level: AtomicU8::new(Level::Debug.rank()),
            sink: Mutex::new(stdout_sink()),
            termination: RwLock::new(Termination::default()),
        }
    }

    /// Set the minimum level
    pub fn with_level(self, level: Level) -> Self {
        self.set_level(level);
        self
    }

    /// Set the output sink
    pub fn with_output(self, writer: impl Write + Send + 'static) -> Self {
        self.set_output(writer);
        self
    }

    /// Set the termination strategy
    pub fn with_termination(self, termination: Termination) -> Self {
        self.set_termination(termination);
        self
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_rank(self.level.load(Ordering::Relaxed))
    }

    /// Replace the sink, returning the previous one
    pub fn set_output(&self, writer: impl Write + Send + 'static) -> Sink {
        std::mem::replace(&mut *self.sink.lock(), Box::new(writer))
    }

    /// Point the sink back at stdout, returning the previous one
    pub fn reset_output(&self) -> Sink {
        std::mem::replace(&mut *self.sink.lock(), stdout_sink())
    }

    pub fn set_termination(&self, termination: Termination) {
        *self.termination.write() = termination;
    }

    pub fn termination(&self) -> Termination {
        *self.termination.read()
    }

    /// Whether a line at `level` would be written
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Unleveled line; written regardless of the minimum level
    pub fn print(&self, message: impl fmt::Display) {
        self.emit(None, None, &message.to_string());
    }

    pub fn debug(&self, message: impl fmt::Display) {
        if self.is_enabled(Level::Debug) {
            self.emit(Some(Level::Debug), None, &message.to_string());
        }
    }

    /// Debug line that also carries the caller location
    #[track_caller]
    pub fn debug_with_stack(&self, message: impl fmt::Display) {
        if self.is_enabled(Level::Debug) {
            let site = CallSite::from(Location::caller());
            self.emit(Some(Level::Debug), Some(site), &message.to_string());
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        if self.is_enabled(Level::Info) {
            self.emit(Some(Level::Info), None, &message.to_string());
        }
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        if self.is_enabled(Level::Warn) {
            let site = CallSite::from(Location::caller());
            self.emit(Some(Level::Warn), Some(site), &message.to_string());
        }
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        if self.is_enabled(Level::Error) {
            let site = CallSite::from(Location::caller());
            self.emit(Some(Level::Error), Some(site), &message.to_string());
        }
    }

    /// Log the error of `result` at Error level, if there is one.
    ///
    /// Returns `true` when an error was logged. Returns `false` for `Ok`,
    /// and also when the minimum level is above Error.
    #[track_caller]
    pub fn err_nil<T, E: fmt::Display>(&self, result: &Result<T, E>) -> bool {
        if !self.is_enabled(Level::Error) {
            return false;
        }
        match result {
            Ok(_) => false,
            Err(err) => {
                let site = CallSite::from(Location::caller());
                self.emit(Some(Level::Error), Some(site), &err.to_string());
                true
            }
        }
    }

    /// Write a Fatal line, then terminate with `message` as the payload.
    ///
    /// Fatal is the highest level, so the minimum level never suppresses it.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(CallSite::from(Location::caller()), message.to_string())
    }

    /// Like [`LineLogger::err_nil`], but an error is logged at Fatal and then
    /// terminates.
    ///
    /// Gated like `err_nil`: returns `false` with no output when the minimum
    /// level is above Error. `Ok` returns `false` with no output. An `Err`
    /// never returns normally, so `true` is only seen by a caller that
    /// intercepts the termination.
    #[track_caller]
    pub fn fatal_nil<T, E: fmt::Display>(&self, result: &Result<T, E>) -> bool {
        if !self.is_enabled(Level::Error) {
            return false;
        }
        match result {
            Ok(_) => false,
            Err(err) => self.fatal_at(CallSite::from(Location::caller()), err.to_string()),
        }
    }

    pub(crate) fn fatal_at(&self, site: CallSite<'_>, message: String) -> ! {
        self.emit(Some(Level::Fatal), Some(site), &message);
        self.termination().terminate(message)
    }

    /// Compose and write one line. The level gate is the caller's job.
    pub(crate) fn emit(&self, level: Option<Level>, site: Option<CallSite<'_>>, message: &str) {
        let location = site.map(format::location);
        let line = format::compose_line(
            &format::timestamp(),
            level,
            location.as_deref(),
            message,
        );
        if self.write_line(&line).is_err() {
            self.termination().terminate(SINK_FAILURE_MESSAGE.to_string());
        }
    }

    fn write_line(&self, line: &str) -> LogResult<()> {
        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    pub(crate) fn flush_sink(&self) -> LogResult<()> {
        self.sink.lock().flush()?;
        Ok(())
    }
}
