// SPDX-License-Identifier: MIT OR Apache-2.0

//! Control flow for the two highest levels.
//!
//! A [`Level::Panic`](crate::Level::Panic) line means the current operation
//! cannot continue. The logger writes the line and hands back an [`Abort`]
//! carrying the message; the caller either returns it as an error or
//! [`raise`](Abort::raise)s it, in which case an enclosing [`catch_abort`]
//! boundary receives it.
//!
//! A [`Level::Fatal`](crate::Level::Fatal) line ends the process through
//! [`terminate_process`].

use crate::error::Error;
use std::panic::{self, UnwindSafe};

/// Exit status used by [`terminate_process`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// An unrecoverable error raised by a panic-level log line.
///
/// The line has already been handed to the sink when an `Abort` exists.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Abort {
    message: String,
    write_error: Option<Error>,
}

impl Abort {
    pub(crate) fn new(message: String, write_error: Option<Error>) -> Self {
        Self {
            message,
            write_error,
        }
    }

    /// The formatted message that was logged.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error from writing the line, if writing failed.
    pub fn write_error(&self) -> Option<&Error> {
        self.write_error.as_ref()
    }

    pub fn into_message(self) -> String {
        self.message
    }

    /// Unwinds with this `Abort` as the panic payload.
    ///
    /// [`catch_abort`] turns the unwind back into a value.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

/// Runs `f`, returning any [`Abort`] raised inside it as an `Err`.
///
/// Panics whose payload is not an `Abort` keep unwinding.
///
/// ```
/// use linewise::{catch_abort, Flags, Level, Logger, MemoryWriter};
///
/// let logger = Logger::stderr(Level::Debug, Flags::empty());
/// logger.set_output(MemoryWriter::new());
///
/// let result = catch_abort(|| {
///     logger.panic("state is corrupt").raise();
/// });
/// assert_eq!(result.unwrap_err().message(), "state is corrupt");
/// ```
pub fn catch_abort<F, R>(f: F) -> Result<R, Abort>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Abort>() {
            Ok(abort) => Err(*abort),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Ends the process with [`FATAL_EXIT_CODE`].
///
/// Called after a fatal line has been written. Destructors of live values do
/// not run; file output is unbuffered, so the line is already with the OS.
pub fn terminate_process() -> ! {
    std::process::exit(FATAL_EXIT_CODE)
}
