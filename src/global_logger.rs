// SPDX-License-Identifier: MIT OR Apache-2.0

//! An explicit, process-wide default logger.
//!
//! Most code should receive a [`Logger`] (or `Arc<Logger>`) from whoever
//! constructed it. For the places where threading a logger through is not
//! practical, this module offers one shared instance with explicit setup:
//!
//! ```
//! use linewise::global_logger::{default_logger, install_default};
//! use linewise::{Flags, Level, Logger};
//!
//! // Early in main: install the configured logger.
//! let _ = install_default(Logger::stderr(Level::Warn, Flags::STD));
//!
//! // Anywhere later:
//! default_logger().warn("disk almost full").unwrap();
//! ```
//!
//! # Lifecycle
//!
//! The default can be installed once. If [`default_logger`] runs first, it
//! installs a standard-error logger at [`Level::Info`] with [`Flags::STD`],
//! and later installs fail. Configuration can still change afterwards through
//! the logger's setters.

use crate::flags::Flags;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process default.
///
/// Returns the logger back if a default already exists.
pub fn install_default(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// Returns the process default, creating the standard-error fallback if
/// nothing was installed.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::stderr(Level::Info, Flags::STD))
}
