//! Severity levels

use std::fmt;
use std::str::FromStr;

use crate::error::{LogError, LogResult};

/// Severity of a log line, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// All levels in rank order
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric rank (Debug = 0)
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a rank, saturating at Fatal
    pub(crate) fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            _ => Level::Fatal,
        }
    }

    /// Canonical name, as accepted by [`Level::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }

    /// Look up a level by its canonical name.
    ///
    /// Matching is exact and case-sensitive: `"Warn"` resolves, `"warn"` and
    /// `"WARN"` do not.
    pub fn from_name(name: &str) -> LogResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == name)
            .ok_or_else(|| LogError::level_not_found(name))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
