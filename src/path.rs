// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site path display.

/// How much of a call-site path to print in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathMode {
    /// The full path as recorded.
    Long,
    /// The last path segment, `c.rs`.
    Short,
    /// The last two path segments, `b/c.rs`.
    Relative,
}

/// Returns the portion of `path` selected by `mode`.
///
/// Paths with too few `'/'` separators for the mode are returned unchanged.
///
/// ```
/// use linewise::{shorten, PathMode};
/// assert_eq!(shorten("/a/b/c.rs", PathMode::Short), "c.rs");
/// assert_eq!(shorten("/a/b/c.rs", PathMode::Relative), "b/c.rs");
/// ```
pub fn shorten(path: &str, mode: PathMode) -> &str {
    let cut = match mode {
        PathMode::Long => None,
        PathMode::Short => path.rfind('/'),
        PathMode::Relative => path.rmatch_indices('/').nth(1).map(|(i, _)| i),
    };
    match cut {
        Some(i) => &path[i + 1..],
        None => path,
    }
}
