// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for linewise.
//!
//! Formatting never fails. Only I/O on the sink produces an [`Error`], and of
//! those only [`Error::Write`] is meant to be survivable: a logger that cannot
//! open (or re-open) its destination is a configuration problem, reported by
//! [`Error::is_fatal`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An I/O failure on the logger's destination.
#[derive(Debug, Error)]
pub enum Error {
    /// The destination file could not be opened when the logger was configured.
    #[error("cannot open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The destination file disappeared and could not be recreated.
    #[error("cannot recreate log file {}: {source}", .path.display())]
    Reopen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing a formatted line failed. The line is dropped.
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    /// Whether the logger has lost its destination.
    ///
    /// Callers should abort startup (or the process) on a fatal error rather
    /// than continue without logging.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Open { .. } | Error::Reopen { .. })
    }
}

/// A string that does not name a [`crate::Level`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// A string that contains an unknown [`crate::Flags`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format flag {name:?}")]
pub struct ParseFlagsError {
    name: String,
}

impl ParseFlagsError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
