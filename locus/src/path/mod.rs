//! Request path handling.
//!
//! A request path is the only externally visible input format of the
//! traverser. Its grammar is deliberately small:
//!
//! - `/` separates segments; empty segments are ignored
//! - each segment is percent-decoded on its own, so `%2F` is data, not a
//!   separator
//! - `.` segments are dropped and `..` removes the previous segment, never
//!   climbing above the root
//!
//! # Examples
//!
//! ```
//! use locus::path::split_path;
//!
//! let segments = split_path("/docs/./guide/../space%20thing/@@view");
//! assert_eq!(segments, vec!["docs", "space thing", "@@view"]);
//! ```

pub mod split;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use split::{decode_segment, split_path};
