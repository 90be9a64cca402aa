// SPDX-License-Identifier: MIT OR Apache-2.0

//! `format!`-style logging macros.
//!
//! Each macro takes a logger expression followed by a format string and its
//! arguments, and forwards to the matching `*_args` method. Arguments are
//! only formatted when the level passes the logger's threshold.
//!
//! ```
//! use linewise::{Flags, Level, Logger, MemoryWriter};
//!
//! let memory = MemoryWriter::new();
//! let logger = Logger::stderr(Level::Info, Flags::empty());
//! logger.set_output(memory.clone());
//!
//! let port = 8080;
//! linewise::infof!(logger, "listening on {port}").unwrap();
//! linewise::debugf!(logger, "dropped {}", port).unwrap();
//! assert_eq!(memory.contents(), "INFO: listening on 8080\n");
//! ```

/// Writes a formatted DEBUG line; see [`Logger::debug_args`](crate::Logger::debug_args).
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_args(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted INFO line; see [`Logger::info_args`](crate::Logger::info_args).
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_args(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted WARN line; see [`Logger::warn_args`](crate::Logger::warn_args).
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_args(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted ERROR line; see [`Logger::error_args`](crate::Logger::error_args).
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_args(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted PANIC line and evaluates to the [`Abort`](crate::Abort).
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_args(::std::format_args!($($arg)+))
    };
}

/// Writes a formatted FATAL line and terminates the process.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_args(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Flags, Level, Logger, MemoryWriter};

    #[test]
    fn macros_forward_with_caller_location() {
        let memory = MemoryWriter::new();
        let logger = Logger::stderr(Level::Debug, Flags::SHORT_FILE);
        logger.set_output(memory.clone());

        let line = line!() + 1;
        crate::warnf!(logger, "{}+{}={}", 1, 2, 1 + 2).unwrap();
        crate::errorf!(&logger, "plain").unwrap();
        let abort = crate::panicf!(logger, "code {:#x}", 255);

        assert_eq!(abort.message(), "code 0xff");
        assert_eq!(
            memory.lines(),
            [
                format!("WARN: macros.rs:{line}: 1+2=3"),
                format!("ERROR: macros.rs:{}: plain", line + 1),
                format!("PANIC: macros.rs:{}: code 0xff", line + 2),
            ]
        );
    }
}
