//! Line composition
//!
//! Every emitted line is built from the same ordered segments:
//! timestamp, level tag, caller location, styled message, reset, newline.
//! Which segments appear depends on the level and on whether a location
//! was captured. Composition is pure so it can be checked byte for byte.

use std::borrow::Cow;
use std::path::Path;

use chrono::Local;

use crate::color::{level_tag, message_style, Color, RESET};
use crate::level::Level;

/// Timestamp layout: `YYYY/MM/DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Source position of the code that asked for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

impl From<&'static std::panic::Location<'static>> for CallSite<'static> {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Gray local-time timestamp, taken now
pub fn timestamp() -> String {
    Color::DarkGray.paint(&Local::now().format(TIMESTAMP_FORMAT).to_string())
}

/// Gray `path:line` tag for a call site, relative to the working directory
/// when possible
pub fn location(site: CallSite<'_>) -> String {
    let cwd = std::env::current_dir().ok();
    let file = relative_path(site.file, cwd.as_deref());
    Color::DarkGray.paint(&format!("{}:{}", file, site.line))
}

/// Strip `cwd/` from `file` when it is a prefix, otherwise keep `file`.
///
/// `#[track_caller]` paths are usually already relative (to the workspace
/// root, e.g. `crates/llog-core/src/logger.rs`), so they pass through
/// unchanged. Stripping only applies when the compiler recorded an
/// absolute path.
fn relative_path<'a>(file: &'a str, cwd: Option<&Path>) -> Cow<'a, str> {
    let Some(cwd) = cwd.and_then(Path::to_str) else {
        return Cow::Borrowed(file);
    };
    let prefix = format!("{}/", cwd.trim_end_matches('/'));
    match file.strip_prefix(prefix.as_str()) {
        Some(rest) => Cow::Owned(rest.to_string()),
        None => Cow::Borrowed(file),
    }
}

/// Assemble one complete line.
///
/// `level` is `None` for unleveled prints. `location` is the already
/// rendered caller tag, if the line carries one.
pub fn compose_line(
    timestamp: &str,
    level: Option<Level>,
    location: Option<&str>,
    message: &str,
) -> String {
    let mut line = String::with_capacity(timestamp.len() + message.len() + 64);
    line.push_str(timestamp);
    line.push(' ');

    if let Some(level) = level {
        line.push_str(level_tag(level));
        line.push(' ');
    }

    if let Some(location) = location {
        line.push_str(location);
        line.push(' ');
    }

    if let Some(level) = level {
        line.push_str(message_style(level));
    }
    line.push_str(message);
    line.push_str(RESET);
    line.push('\n');
    line
}
