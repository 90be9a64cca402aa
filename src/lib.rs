//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# linewise

linewise is a small leveled logger for Rust that writes one formatted line per call.

# The problem

Sometimes a component just needs to write timestamped, severity-tagged lines to a file, and a full
logging framework with subscribers, layers and global registration is more machinery than the job
deserves. The file should also survive the ops team deleting it from under a running process.

# The line format

```text
[prefix][YYYY-MM-DD HH:MM:SS[.ffffff]] LEVEL: [file:line: ]message
```

Which parts appear is controlled by [`Flags`]:

| Flag                      | Adds                                  |
|---------------------------|---------------------------------------|
| [`Flags::DATE`]           | `YYYY-MM-DD `                         |
| [`Flags::TIME`]           | `HH:MM:SS`                            |
| [`Flags::MICROSECONDS`]   | `HH:MM:SS.ffffff`                     |
| [`Flags::LONG_FILE`]      | the full call-site path and line      |
| [`Flags::SHORT_FILE`]     | the last path segment and line        |
| [`Flags::RELATIVE_FILE`]  | the last two path segments and line   |

Every line ends in exactly one newline.

# Levels

[`Level::Debug`] < [`Level::Info`] < [`Level::Warn`] < [`Level::Error`] < [`Level::Panic`] < [`Level::Fatal`].
Lines below the logger's threshold are discarded without formatting their arguments.

The two highest levels change control flow after writing:

* `panic` returns an [`Abort`] to be propagated as an error, or raised and caught by [`catch_abort`].
* `fatal` ends the process through [`terminate_process`].

# The API

```rust
use linewise::{Flags, Level, Logger};

let dir = tempfile::tempdir().unwrap();
let logger = Logger::new(Some(dir.path().join("app.log").as_path()), Level::Info, Flags::STD).unwrap();

logger.info("starting").unwrap();
logger.warn_values(&[&"queue depth", &512]).unwrap();
linewise::errorf!(logger, "request {} failed: {}", 17, "timeout").unwrap();
```

Each call returns the result of writing the line. Logging failures are ordinary errors; most callers
ignore them, some don't.

# File destinations

Files are opened create + append with mode `0644`. Before each line the logger checks that the file
still exists and recreates it if it was removed.

# Multithreading

A [`Logger`] is `Send + Sync`. Each line is formatted and written under the logger's mutex, so lines
from different threads never interleave. Share a logger with `Arc`, or install one process default
through [`global_logger`].
*/

mod abort;
mod call_site;
mod config;
mod error;
mod flags;
pub mod global_logger;
mod header;
mod itoa;
mod level;
mod logger;
mod macros;
mod memory_writer;
mod path;
mod sink;

pub use abort::{Abort, FATAL_EXIT_CODE, catch_abort, terminate_process};
pub use call_site::{
    CallSite, CallSiteProvider, FixedCallSite, NoCallSite, StackWalk, TrackCaller,
};
pub use config::{Config, DEFAULT_CALL_DEPTH};
pub use error::{Error, ParseFlagsError, ParseLevelError};
pub use flags::Flags;
pub use header::{HeaderConfig, format_header};
pub use itoa::render;
pub use level::Level;
pub use logger::Logger;
pub use memory_writer::MemoryWriter;
pub use path::{PathMode, shorten};
pub use sink::Destination;
