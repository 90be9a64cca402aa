// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::ParseLevelError;
use std::fmt::Display;
use std::str::FromStr;

/// Severity of a log line.
///
/// Levels are ordered; a line is written when its level is greater than or
/// equal to the logger's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Print-style debugging
    #[default]
    Debug,
    /// Routine operational messages
    Info,
    /// Suspicious condition
    Warn,
    /// Runtime error
    Error,
    /// Unrecoverable in the current control flow; see [`crate::Abort`]
    Panic,
    /// Terminates the process after writing
    Fatal,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
    ];

    /// The name written into the header.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ParseLevelError::new(s)),
        }
    }
}

/*
Boilerplate notes for Level:

- Copy/Clone/Eq/Hash: plain fieldless enum
- Ord: the declaration order is the filtering relation
- Default: Debug, so a default logger lets everything through
- Display: the header name
- FromStr: lets embedding applications parse a level from flags or config files
*/
