//! Request path splitting.
//!
//! A request path is split on literal `/` before any decoding happens, so an
//! encoded separator (`%2F`) survives as data inside a single segment. Each
//! piece is then percent-decoded and the dot-segment rules are applied:
//!
//! - empty pieces are dropped (leading, trailing and repeated slashes)
//! - `.` is dropped
//! - `..` removes the previously kept segment, if there is one
//!
//! Splitting never fails; every string maps to a (possibly empty) sequence.

use percent_encoding::percent_decode_str;

/// Split a request path into decoded segments.
///
/// # Examples
///
/// ```
/// use locus::path::split_path;
///
/// assert_eq!(split_path("/foo/"), vec!["foo"]);
/// assert_eq!(split_path("foo/./bar"), vec!["foo", "bar"]);
/// assert_eq!(split_path("foo/../bar"), vec!["bar"]);
/// assert_eq!(split_path("/a%2Fb/c"), vec!["a/b", "c"]);
/// assert!(split_path("/").is_empty());
/// ```
#[must_use]
pub fn split_path(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for raw in path.split('/').filter(|piece| !piece.is_empty()) {
        let segment = decode_segment(raw);
        match segment.as_str() {
            "." => {}
            ".." => {
                // Popping past the root is a no-op.
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments
}

/// Percent-decode a single path segment.
///
/// Malformed escapes are kept as written and byte sequences that do not form
/// valid UTF-8 are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use locus::path::decode_segment;
///
/// assert_eq!(decode_segment("space%20thing"), "space thing");
/// assert_eq!(decode_segment("100%"), "100%");
/// ```
#[must_use]
pub fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
