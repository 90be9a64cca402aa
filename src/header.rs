// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log line header composition.
//!
//! A header is, in order: the logger's prefix, an optional bracketed timestamp,
//! the level name, and an optional call site:
//!
//! ```text
//! prefix[2023-01-05 08:09:03.000123] INFO: lib.rs:42: message
//! ```

use crate::call_site::CallSite;
use crate::flags::Flags;
use crate::itoa::render;
use crate::level::Level;
use crate::path::shorten;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// The logger settings that shape a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConfig<'a> {
    pub prefix: &'a str,
    pub flags: Flags,
}

/// Appends the header for one line to `buf`.
///
/// `timestamp` is used as given; convert to local time or UTC before calling.
/// When a file-path flag is set and `call_site` is `None`,
/// [`CallSite::UNKNOWN`] is printed.
///
/// ```
/// use chrono::NaiveDate;
/// use linewise::{format_header, Flags, HeaderConfig, Level};
///
/// let at = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap().and_hms_opt(8, 9, 3).unwrap();
/// let mut buf = Vec::new();
/// format_header(&mut buf, &at, Level::Info, None, &HeaderConfig { prefix: "", flags: Flags::STD });
/// assert_eq!(buf, b"[2023-01-05 08:09:03] INFO: ");
/// ```
pub fn format_header(
    buf: &mut Vec<u8>,
    timestamp: &NaiveDateTime,
    level: Level,
    call_site: Option<&CallSite>,
    config: &HeaderConfig<'_>,
) {
    let flags = config.flags;
    buf.extend_from_slice(config.prefix.as_bytes());

    if flags.wants_timestamp() {
        buf.push(b'[');
        if flags.contains(Flags::DATE) {
            // years before 0 have no four-digit rendering; clamp them
            render(buf, u64::try_from(timestamp.year()).unwrap_or(0), 4);
            buf.push(b'-');
            render(buf, u64::from(timestamp.month()), 2);
            buf.push(b'-');
            render(buf, u64::from(timestamp.day()), 2);
            buf.push(b' ');
        }
        if flags.wants_clock() {
            render(buf, u64::from(timestamp.hour()), 2);
            buf.push(b':');
            render(buf, u64::from(timestamp.minute()), 2);
            buf.push(b':');
            render(buf, u64::from(timestamp.second()), 2);
            if flags.contains(Flags::MICROSECONDS) {
                buf.push(b'.');
                // leap seconds report nanoseconds past 1e9
                let micros = (timestamp.nanosecond() / 1_000).min(999_999);
                render(buf, u64::from(micros), 6);
            }
        }
        buf.extend_from_slice(b"] ");
    }

    buf.extend_from_slice(level.name().as_bytes());
    buf.extend_from_slice(b": ");

    if let Some(mode) = flags.path_mode() {
        let unknown = CallSite::UNKNOWN;
        let site = call_site.unwrap_or(&unknown);
        buf.extend_from_slice(shorten(&site.file, mode).as_bytes());
        buf.push(b':');
        render(buf, u64::from(site.line), -1);
        buf.extend_from_slice(b": ");
    }
}
