#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # locus
//!
//! A library for resolving request paths against an object graph.
//!
//! A request path such as `/docs/guide/@@edit/3` is split into decoded
//! segments and walked from a root node, one child lookup per segment. The
//! walk yields a *context* node, the *view name* that stopped it and the
//! remaining *subpath*, and records on every reached node the name and
//! parent it was found by.
//!
//! ## Core Types
//!
//! - [`split_path`]: Path splitting with percent-decoding and dot handling
//! - [`Node`], [`Container`] and [`Location`]: The object-graph capabilities
//! - [`Traverser`] and [`Resolution`]: Path resolution
//! - [`Folder`], [`Item`] and [`TreeDocument`]: Ready-made nodes and a YAML tree format
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use locus::{lineage, split_path, Folder, NodeRef, Traverser};
//!
//! assert_eq!(split_path("/a/./b/../c%20d"), vec!["a", "c d"]);
//!
//! let guide: NodeRef = Arc::new(Folder::new());
//! let docs = Folder::new().with_child("guide", Arc::clone(&guide));
//! let root: NodeRef = Arc::new(Folder::located().with_child("docs", Arc::new(docs)));
//!
//! // Parent links are weak: the traverser keeps the tree alive.
//! let traverser = Traverser::new(root);
//! let resolution = traverser.traverse("/docs/guide/@@edit/3").unwrap();
//! assert_eq!(resolution.view_name, "edit");
//! assert_eq!(resolution.subpath, vec!["3"]);
//! assert_eq!(lineage(&guide).count(), 3);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod location;
pub mod logging;
pub mod node;
pub mod path;
pub mod traversal;
pub mod tree;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use dispatch::{publish, ViewDispatcher};
pub use error::{Error, Result};
pub use location::{lineage, Lineage, Location};
pub use logging::{init_logger, LogLevel, Logger};
pub use node::{same_node, Container, Node, NodeRef};
pub use path::{decode_segment, split_path};
pub use traversal::{traverse, FixupMode, Resolution, StopReason, Traverser, VIEW_MARKER};
pub use tree::{Folder, Item, NodeKind, TreeDocument};
