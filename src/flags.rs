// SPDX-License-Identifier: MIT OR Apache-2.0

//! Header format flags.
//!
//! [`Flags`] selects the optional parts of a log line header. The timestamp
//! parts combine freely. The three file-path flags are alternatives; when more
//! than one is set, [`Flags::path_mode`] picks one in the fixed order short,
//! relative, long.

use crate::error::ParseFlagsError;
use crate::path::PathMode;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// A set of header format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// `YYYY-MM-DD`
    pub const DATE: Flags = Flags(1 << 0);
    /// `HH:MM:SS`
    pub const TIME: Flags = Flags(1 << 1);
    /// `HH:MM:SS.ffffff`; implies the time.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full call-site path.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Last segment of the call-site path.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Last two segments of the call-site path.
    pub const RELATIVE_FILE: Flags = Flags(1 << 5);
    /// Date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const TIMESTAMP: Flags = Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0);
    const ANY_FILE: Flags = Flags(Self::LONG_FILE.0 | Self::SHORT_FILE.0 | Self::RELATIVE_FILE.0);
    const ALL: Flags = Flags(Self::TIMESTAMP.0 | Self::ANY_FILE.0);

    /// No flags: the header is just the prefix and the level.
    pub const fn empty() -> Self {
        Flags(0)
    }

    /// The raw bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from raw bits, discarding bits that name no flag.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Flags(bits & Self::ALL.0)
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any flag in `other` is set.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub(crate) const fn wants_timestamp(self) -> bool {
        self.intersects(Self::TIMESTAMP)
    }

    pub(crate) const fn wants_clock(self) -> bool {
        self.intersects(Flags(Self::TIME.0 | Self::MICROSECONDS.0))
    }

    /// Whether the header carries a call site.
    pub const fn wants_call_site(self) -> bool {
        self.intersects(Self::ANY_FILE)
    }

    /// The call-site path display selected by these flags, if any.
    pub const fn path_mode(self) -> Option<PathMode> {
        if self.contains(Self::SHORT_FILE) {
            Some(PathMode::Short)
        } else if self.contains(Self::RELATIVE_FILE) {
            Some(PathMode::Relative)
        } else if self.contains(Self::LONG_FILE) {
            Some(PathMode::Long)
        } else {
            None
        }
    }
}

impl BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;
    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

/// Parses names such as `date|time|shortfile`.
///
/// Names are case-insensitive and may be separated by `|` or `,`. `std` means
/// date and time; `none` adds nothing.
impl FromStr for Flags {
    type Err = ParseFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();
        for name in s.split(['|', ',']).map(str::trim).filter(|n| !n.is_empty()) {
            flags |= match name.to_ascii_lowercase().as_str() {
                "date" => Flags::DATE,
                "time" => Flags::TIME,
                "microseconds" | "micros" => Flags::MICROSECONDS,
                "longfile" => Flags::LONG_FILE,
                "shortfile" => Flags::SHORT_FILE,
                "relativefile" => Flags::RELATIVE_FILE,
                "std" => Flags::STD,
                "none" => Flags::empty(),
                _ => return Err(ParseFlagsError::new(name)),
            };
        }
        Ok(flags)
    }
}
