//! ANSI terminal colors and level tags

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::level::Level;

/// Resets all attributes
pub const RESET: &str = "\x1b[0m";

/// Bold / increased intensity
pub const BOLD: &str = "\x1b[1m";

/// Standard 16-color ANSI foreground colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl Color {
    /// SGR escape sequence for this color
    pub const fn code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::LightGray => "\x1b[37m",
            Color::DarkGray => "\x1b[90m",
            Color::LightRed => "\x1b[91m",
            Color::LightGreen => "\x1b[92m",
            Color::LightYellow => "\x1b[93m",
            Color::LightBlue => "\x1b[94m",
            Color::LightMagenta => "\x1b[95m",
            Color::LightCyan => "\x1b[96m",
            Color::White => "\x1b[97m",
        }
    }

    /// Wrap `text` in this color followed by a reset
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.code(), text, RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static LEVEL_TAGS: Lazy<HashMap<Level, String>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Level::Debug, format!("{}{}DEBU{}", BOLD, Color::Blue, RESET));
    m.insert(Level::Info, format!("{}INFO{}", Color::LightGreen, RESET));
    m.insert(Level::Warn, format!("{}WARN{}", Color::Yellow, RESET));
    m.insert(Level::Error, format!("{}ERR{}", Color::Red, RESET));
    m.insert(Level::Fatal, format!("{}{}FATAL{}", BOLD, Color::Red, RESET));
    m
});

/// Colorized short label for a level ("DEBU", "INFO", "WARN", "ERR", "FATAL")
pub fn level_tag(level: Level) -> &'static str {
    LEVEL_TAGS.get(&level).map(String::as_str).unwrap_or_default()
}

static BOLD_RED: Lazy<String> = Lazy::new(|| format!("{}{}", BOLD, Color::Red));

/// Color prefix applied to the message body of a level, if any
pub(crate) fn message_style(level: Level) -> &'static str {
    match level {
        Level::Debug | Level::Info => "",
        Level::Warn => Color::Yellow.code(),
        Level::Error => Color::Red.code(),
        Level::Fatal => BOLD_RED.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Color::Red.code(), "\x1b[31m");
        assert_eq!(Color::Yellow.code(), "\x1b[33m");
        assert_eq!(Color::DarkGray.code(), "\x1b[90m");
        assert_eq!(Color::LightGreen.code(), "\x1b[92m");
        assert_eq!(Color::White.to_string(), "\x1b[97m");
    }

    #[test]
    fn test_paint() {
        assert_eq!(Color::DarkGray.paint("x"), "\x1b[90mx\x1b[0m");
    }

    #[test]
    fn test_level_tags() {
        assert_eq!(level_tag(Level::Debug), "\x1b[1m\x1b[34mDEBU\x1b[0m");
        assert_eq!(level_tag(Level::Info), "\x1b[92mINFO\x1b[0m");
        assert_eq!(level_tag(Level::Warn), "\x1b[33mWARN\x1b[0m");
        assert_eq!(level_tag(Level::Error), "\x1b[31mERR\x1b[0m");
        assert_eq!(level_tag(Level::Fatal), "\x1b[1m\x1b[31mFATAL\x1b[0m");
    }

    #[test]
    fn test_message_style_matches_colors() {
        assert_eq!(message_style(Level::Info), "");
        assert_eq!(message_style(Level::Warn), Color::Yellow.code());
        assert_eq!(message_style(Level::Error), Color::Red.code());
        assert_eq!(
            message_style(Level::Fatal),
            format!("{}{}", BOLD, Color::Red.code())
        );
        assert_eq!(message_style(Level::Fatal), "\x1b[1m\x1b[31m");
    }
}
