// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Logger`] façade.
//!
//! A `Logger` owns its destination and a reusable line buffer behind one
//! mutex. Every emission takes the lock, formats the header and message into
//! the buffer, and hands the finished line to the destination in a single
//! write, so lines from concurrent threads never interleave.
//!
//! # Argument styles
//!
//! Each level has three entry points:
//!
//! | Method            | Input                                         |
//! |-------------------|-----------------------------------------------|
//! | `info`            | a finished message                            |
//! | `info_values`     | a list of [`Display`] values, joined by `' '` |
//! | `info_args`       | [`format_args!`] output; see [`crate::infof!`] |
//!
//! The panic level returns an [`Abort`] and the fatal level terminates the
//! process; see [`Abort`] and [`terminate_process`].

use crate::abort::{Abort, terminate_process};
use crate::call_site::{CallSiteProvider, StackWalk};
use crate::config::Config;
use crate::error::Error;
use crate::flags::Flags;
use crate::header::{HeaderConfig, format_header};
use crate::level::Level;
use crate::sink::{Destination, Sink};
use chrono::Local;
use std::fmt::{self, Display, Write as _};
use std::io::Write;
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct State {
    prefix: String,
    flags: Flags,
    level: Level,
    call_depth: usize,
    sink: Sink,
    buf: Vec<u8>,
    call_sites: Arc<dyn CallSiteProvider>,
}

/// A leveled line logger.
///
/// # Example
///
/// ```rust
/// use linewise::{Flags, Level, Logger};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("app.log");
/// let logger = Logger::new(Some(path.as_path()), Level::Info, Flags::STD | Flags::SHORT_FILE).unwrap();
///
/// logger.info("listening").unwrap();
/// logger.debug("not written").unwrap();
///
/// let written = std::fs::read_to_string(&path).unwrap();
/// assert!(written.starts_with('['));
/// assert!(written.contains("] INFO: "));
/// assert!(written.ends_with(": listening\n"));
/// assert_eq!(written.lines().count(), 1);
/// ```
#[derive(Debug)]
pub struct Logger {
    state: Mutex<State>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived - shows configuration and destination
// - Clone: NOT implemented - a logger owns its destination handle; share it
//   with Arc<Logger> instead
// - PartialEq/Eq/Hash: NOT implemented - no meaningful equality for a resource owner
// - Default: NOT implemented - construction can fail for file destinations;
//   use Logger::stderr for an infallible logger
// - Send/Sync: Automatic through Mutex<State>

/// Joins values with single spaces.
fn join_values(values: &[&dyn Display]) -> String {
    let mut joined = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        // writing into a String cannot fail
        let _ = write!(joined, "{value}");
    }
    joined
}

fn args_to_string(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(s) => s.to_string(),
        None => args.to_string(),
    }
}

/// Generates the three argument styles for a level that only writes.
macro_rules! level_methods {
    ($level:expr, $name:literal, $plain:ident, $values:ident, $args:ident) => {
        #[doc = concat!("Writes `message` at ", $name, ".")]
        ///
        /// Errors as [`emit`](Self::emit); a [fatal](Error::is_fatal) one
        /// means the destination is gone and the caller must stop.
        #[track_caller]
        pub fn $plain(&self, message: &str) -> Result<(), Error> {
            self.emit($level, message)
        }

        #[doc = concat!("Writes `values` joined by spaces at ", $name, ".")]
        #[track_caller]
        pub fn $values(&self, values: &[&dyn Display]) -> Result<(), Error> {
            if !self.is_enabled($level) {
                return Ok(());
            }
            self.emit($level, &join_values(values))
        }

        #[doc = concat!("Writes a formatted message at ", $name, ".")]
        #[track_caller]
        pub fn $args(&self, args: fmt::Arguments<'_>) -> Result<(), Error> {
            if !self.is_enabled($level) {
                return Ok(());
            }
            self.emit($level, &args_to_string(args))
        }
    };
}

impl Logger {
    /// Creates a logger writing to `destination`, or to standard error when
    /// `destination` is `None`.
    ///
    /// Files are opened for append and created with mode `0644` if absent. An
    /// error here is [fatal](Error::is_fatal): the application should not
    /// start without its log.
    pub fn new(destination: Option<&Path>, level: Level, flags: Flags) -> Result<Self, Error> {
        Self::from_config(
            Config::default()
                .with_destination(Destination::from_path(destination))
                .with_level(level)
                .with_flags(flags),
        )
    }

    /// Creates a logger writing to standard error. Cannot fail.
    pub fn stderr(level: Level, flags: Flags) -> Self {
        Self::with_sink(
            Sink::Stderr,
            Config::default().with_level(level).with_flags(flags),
        )
    }

    /// Creates a logger from a full [`Config`]. Errors as [`Logger::new`].
    pub fn from_config(config: Config) -> Result<Self, Error> {
        let sink = Sink::open(&config.destination)?;
        Ok(Self::with_sink(sink, config))
    }

    fn with_sink(sink: Sink, config: Config) -> Self {
        Self {
            state: Mutex::new(State {
                prefix: config.prefix,
                flags: config.flags,
                level: config.level,
                call_depth: config.call_depth,
                sink,
                buf: Vec::new(),
                call_sites: Arc::new(StackWalk),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // fields are replaced whole and the buffer is cleared before each
        // use, so poisoned state is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes one line at `level`.
    ///
    /// Lines below the threshold return `Ok(())` without touching the
    /// destination. Otherwise the header and `message` are written followed by
    /// exactly one newline; a message that already ends in `'\n'` gets no
    /// second one. The result of the write is returned as is.
    ///
    /// # Errors
    ///
    /// [`Error::Write`] means this one line was lost. [`Error::Reopen`] means
    /// the destination file vanished and could not be recreated: the error is
    /// [fatal](Error::is_fatal), every later line will fail the same way, and
    /// the caller must stop rather than carry on without a log. The level
    /// methods return the same errors.
    #[track_caller]
    pub fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        let caller = Location::caller();
        let now = Local::now().naive_local();

        let mut state = self.lock();
        if level < state.level {
            return Ok(());
        }

        let mut call_site = None;
        if state.flags.wants_call_site() {
            let provider = Arc::clone(&state.call_sites);
            let depth = state.call_depth;
            drop(state);
            call_site = provider.resolve(depth, caller);
            state = self.lock();
        }

        let State {
            prefix,
            flags,
            sink,
            buf,
            ..
        } = &mut *state;
        sink.ensure_open()?;

        buf.clear();
        format_header(
            buf,
            &now,
            level,
            call_site.as_ref(),
            &HeaderConfig {
                prefix: prefix.as_str(),
                flags: *flags,
            },
        );
        buf.extend_from_slice(message.as_bytes());
        if !message.ends_with('\n') {
            buf.push(b'\n');
        }
        sink.write(buf)
    }

    /// Whether a line at `level` would be written.
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.lock().level
    }

    level_methods!(Level::Debug, "DEBUG", debug, debug_values, debug_args);
    level_methods!(Level::Info, "INFO", info, info_values, info_args);
    level_methods!(Level::Warn, "WARN", warn, warn_values, warn_args);
    level_methods!(Level::Error, "ERROR", error, error_values, error_args);

    /// Writes `message` at PANIC and returns the [`Abort`] to propagate.
    ///
    /// The line is subject to the threshold like any other; the `Abort` is
    /// returned either way.
    #[track_caller]
    #[must_use = "an Abort should be returned or raised"]
    pub fn panic(&self, message: &str) -> Abort {
        self.abort_with(message.to_string())
    }

    /// Like [`panic`](Self::panic), joining `values` with spaces.
    #[track_caller]
    #[must_use = "an Abort should be returned or raised"]
    pub fn panic_values(&self, values: &[&dyn Display]) -> Abort {
        self.abort_with(join_values(values))
    }

    /// Like [`panic`](Self::panic), with a formatted message.
    #[track_caller]
    #[must_use = "an Abort should be returned or raised"]
    pub fn panic_args(&self, args: fmt::Arguments<'_>) -> Abort {
        self.abort_with(args_to_string(args))
    }

    #[track_caller]
    fn abort_with(&self, message: String) -> Abort {
        let write_error = self.emit(Level::Panic, &message).err();
        Abort::new(message, write_error)
    }

    /// Writes `message` at FATAL, then calls [`terminate_process`].
    #[track_caller]
    pub fn fatal(&self, message: &str) -> ! {
        // the process is ending; a failed write has nowhere to be reported
        let _ = self.emit(Level::Fatal, message);
        terminate_process()
    }

    /// Like [`fatal`](Self::fatal), joining `values` with spaces.
    #[track_caller]
    pub fn fatal_values(&self, values: &[&dyn Display]) -> ! {
        self.fatal(&join_values(values))
    }

    /// Like [`fatal`](Self::fatal), with a formatted message.
    #[track_caller]
    pub fn fatal_args(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(&args_to_string(args))
    }

    /// The current threshold.
    pub fn level(&self) -> Level {
        self.lock().level
    }

    /// Sets the threshold for later lines.
    pub fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    /// The current header flags.
    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    /// Sets the header flags for later lines.
    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    /// A copy of the line prefix.
    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Sets the text written at the start of every later line.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    /// Frames skipped above the caller when resolving call sites.
    pub fn call_depth(&self) -> usize {
        self.lock().call_depth
    }

    /// Sets the call depth; see [`DEFAULT_CALL_DEPTH`](crate::DEFAULT_CALL_DEPTH).
    pub fn set_call_depth(&self, call_depth: usize) {
        self.lock().call_depth = call_depth;
    }

    /// Replaces the call-site provider used for file-path flags.
    pub fn set_call_site_provider(&self, provider: Arc<dyn CallSiteProvider>) {
        self.lock().call_sites = provider;
    }

    /// Switches to a new destination.
    ///
    /// The new file is opened before the old destination is released; on
    /// error the logger keeps writing where it was.
    pub fn set_destination(&self, destination: &Destination) -> Result<(), Error> {
        let sink = Sink::open(destination)?;
        self.lock().sink = sink;
        Ok(())
    }

    /// Writes to an arbitrary writer from now on.
    ///
    /// The writer is never checked for existence or reopened.
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.lock().sink = Sink::writer(Box::new(writer));
    }
}
