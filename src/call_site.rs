// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site attribution.
//!
//! Every public emission method is `#[track_caller]`, so the location of
//! whoever called the logger is always known. A [`CallSiteProvider`] turns
//! that location, plus the configured call depth, into the [`CallSite`]
//! printed in the header.
//!
//! The default provider, [`StackWalk`], walks the stack from the logger's
//! outermost frame and skips `depth` further frames, so a helper that wraps
//! the logger can be attributed to its own caller with a depth of 1.
//! [`TrackCaller`] skips the walk and trusts `#[track_caller]` alone; helpers
//! then opt in by being `#[track_caller]` themselves.

use std::borrow::Cow;
use std::fmt::Debug;
use std::panic::Location;

/// A source location attached to a log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl CallSite {
    /// Printed when no call site could be resolved.
    pub const UNKNOWN: CallSite = CallSite::new("unknown", 0);

    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            file: Cow::Borrowed(file),
            line,
        }
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Resolves the call site of an emission.
///
/// Called outside the logger's lock, once per emitted line, and only when a
/// file-path flag is set. Returning `None` prints [`CallSite::UNKNOWN`].
pub trait CallSiteProvider: Debug + Send + Sync {
    /**
    `depth` is the logger's configured call depth: how many frames above the
    caller of the emission entry point the interesting caller sits. `caller`
    is the caller of the entry point itself, i.e. depth 0.
    */
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite>;
}

/// Demangled symbols of the logger's entry points start with this path.
const ENTRY_POINT: &str = "linewise::logger::Logger";

/// Finds the call site by walking the stack. The default provider.
///
/// Frames are searched for the outermost `Logger` method; the frame right
/// above it is depth 0. Without symbols (stripped binaries, no debug info)
/// depth 0 falls back to the `#[track_caller]` location and deeper requests
/// resolve to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StackWalk;

impl StackWalk {
    fn walk(depth: usize) -> Option<CallSite> {
        let trace = backtrace::Backtrace::new();
        // inlined calls show up as extra symbols of one frame, innermost first
        let symbols: Vec<&backtrace::BacktraceSymbol> =
            trace.frames().iter().flat_map(|frame| frame.symbols()).collect();
        let entry = symbols.iter().rposition(|symbol| {
            symbol
                .name()
                .is_some_and(|name| name.to_string().contains(ENTRY_POINT))
        })?;
        let symbol = symbols.get(entry.checked_add(1)?.checked_add(depth)?)?;
        let file = symbol.filename()?.to_string_lossy().into_owned();
        Some(CallSite {
            file: Cow::Owned(file),
            line: symbol.lineno()?,
        })
    }
}

impl CallSiteProvider for StackWalk {
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite> {
        match Self::walk(depth) {
            Some(site) => Some(site),
            None if depth == 0 => Some(CallSite::from(caller)),
            None => None,
        }
    }
}

/// Uses the `#[track_caller]` location and ignores the numeric depth.
///
/// Cheaper than [`StackWalk`]. Wrapping helpers are skipped only when they
/// are `#[track_caller]` themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrackCaller;

impl CallSiteProvider for TrackCaller {
    fn resolve(&self, _depth: usize, caller: &'static Location<'static>) -> Option<CallSite> {
        Some(CallSite::from(caller))
    }
}

/// Never resolves a call site; headers show [`CallSite::UNKNOWN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoCallSite;

impl CallSiteProvider for NoCallSite {
    fn resolve(&self, _depth: usize, _caller: &'static Location<'static>) -> Option<CallSite> {
        None
    }
}

/// Always resolves to the same call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedCallSite(pub CallSite);

impl CallSiteProvider for FixedCallSite {
    fn resolve(&self, _depth: usize, _caller: &'static Location<'static>) -> Option<CallSite> {
        Some(self.0.clone())
    }
}
