// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Writer
//!
//! [`MemoryWriter`] captures logger output in memory instead of a file or
//! standard error. It is meant for tests that need to look at what was logged:
//!
//! - asserting that a line was (or was not) written
//! - counting how many writes reached the destination
//! - examining the exact bytes of a header
//!
//! The writer is a cheap handle around a shared `Arc<Mutex<Vec<u8>>>`. Hand one
//! clone to [`Logger::set_output`](crate::Logger::set_output) and keep another
//! to read the captured output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    write_calls: usize,
}

/// A `Write` implementation that keeps everything written to it.
///
/// # Example
///
/// ```rust
/// use linewise::{Flags, Level, Logger, MemoryWriter};
///
/// let memory = MemoryWriter::new();
/// let logger = Logger::stderr(Level::Info, Flags::empty());
/// logger.set_output(memory.clone());
///
/// logger.info("captured").unwrap();
/// logger.debug("filtered").unwrap();
///
/// assert_eq!(memory.drain_logs(), "INFO: captured\n");
/// assert_eq!(memory.drain_logs(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    captured: Arc<Mutex<Captured>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostics
// - Clone: Derived - clones share the same buffer, which is the point
// - Default: Derived - empty buffer
// - PartialEq/Eq/Hash: NOT implemented - identity vs content equality is unclear
// - Send/Sync: Automatic through Arc<Mutex<_>>

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Captured> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().bytes).into_owned()
    }

    /// The captured lines, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Returns everything written so far and clears the buffer.
    pub fn drain_logs(&self) -> String {
        let mut captured = self.lock();
        let bytes = std::mem::take(&mut captured.bytes);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// How many times `write` has been called on any clone of this writer.
    pub fn write_calls(&self) -> usize {
        self.lock().write_calls
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut captured = self.lock();
        captured.write_calls += 1;
        captured.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
