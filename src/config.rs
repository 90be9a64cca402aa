// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! [`Config`] gathers everything a [`Logger`](crate::Logger) is constructed
//! from. Every field can also be changed later through the logger's setters.
//!
//! ```
//! use linewise::{Config, Flags, Level, Logger};
//!
//! let level: Level = "warn".parse().unwrap();
//! let flags: Flags = "date|time|shortfile".parse().unwrap();
//! let logger = Logger::from_config(
//!     Config::default().with_level(level).with_flags(flags).with_prefix("worker "),
//! )
//! .unwrap();
//! assert_eq!(logger.level(), Level::Warn);
//! assert_eq!(logger.prefix(), "worker ");
//! ```

use crate::flags::Flags;
use crate::level::Level;
use crate::sink::Destination;
use std::path::PathBuf;

/// Default call depth: the caller of the emission method.
///
/// A depth of 1 attributes lines to the caller of a helper that wraps the
/// logger, and so on up the stack.
pub const DEFAULT_CALL_DEPTH: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub destination: Destination,
    /// Lines below this level are discarded.
    pub level: Level,
    pub flags: Flags,
    /// Written verbatim at the start of every line.
    pub prefix: String,
    /// Frames between the emission method and the caller to attribute; see
    /// [`CallSiteProvider`](crate::CallSiteProvider).
    pub call_depth: usize,
}

impl Default for Config {
    /// Standard error, every level, date and time.
    fn default() -> Self {
        Self {
            destination: Destination::Stderr,
            level: Level::Debug,
            flags: Flags::STD,
            prefix: String::new(),
            call_depth: DEFAULT_CALL_DEPTH,
        }
    }
}

impl Config {
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Shorthand for a file destination.
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_destination(Destination::File(path.into()))
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_call_depth(mut self, call_depth: usize) -> Self {
        self.call_depth = call_depth;
        self
    }
}
