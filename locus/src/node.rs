//! Capabilities of objects that take part in traversal.
//!
//! The traverser never assumes anything about a node beyond two optional
//! capabilities:
//!
//! - **child lookup** ([`Node::container`]): the node can resolve a segment
//!   to one of its children. Nodes without it are leaves.
//! - **location** ([`Node::location`]): the node has a slot recording the
//!   name it was reached by and a weak link to its parent.
//!
//! The forward containment edges (parent to child) are owned by the
//! application's own data structures; the traverser only reads them.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use locus::node::{Container, Node, NodeRef};
//! use locus::{Error, Location, Result};
//!
//! #[derive(Debug, Default)]
//! struct Leaf;
//!
//! impl Node for Leaf {}
//!
//! #[derive(Debug, Default)]
//! struct Echo {
//!     location: Location,
//! }
//!
//! impl Container for Echo {
//!     fn lookup(&self, name: &str) -> Result<NodeRef> {
//!         if name == "leaf" {
//!             Ok(Arc::new(Leaf))
//!         } else {
//!             Err(Error::not_found(name))
//!         }
//!     }
//! }
//!
//! impl Node for Echo {
//!     fn container(&self) -> Option<&dyn Container> {
//!         Some(self)
//!     }
//!
//!     fn location(&self) -> Option<&Location> {
//!         Some(&self.location)
//!     }
//! }
//!
//! let root: NodeRef = Arc::new(Echo::default());
//! assert!(root.container().is_some());
//! assert!(root.container().unwrap().lookup("missing").unwrap_err().is_not_found());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::location::Location;

/// Shared handle to a node in the object graph.
pub type NodeRef = Arc<dyn Node>;

/// An object that can appear in the traversal graph.
///
/// Both capabilities default to absent, so a unit struct implementing
/// `Node` with no methods is a valid leaf.
pub trait Node: Send + Sync + fmt::Debug {
    /// The child-lookup capability, if this node supports it.
    fn container(&self) -> Option<&dyn Container> {
        None
    }

    /// The location slot, if this node carries one.
    fn location(&self) -> Option<&Location> {
        None
    }
}

/// Child lookup by segment name.
pub trait Container {
    /// Resolve `name` to a child node.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::NotFound`](crate::Error::NotFound)
    /// when `name` is absent. Any other error is treated as a failure of the
    /// container and is propagated to the caller of the traversal unchanged.
    fn lookup(&self, name: &str) -> Result<NodeRef>;
}

/// Whether two handles point at the same node.
///
/// Only the data pointers are compared, so two handles created through
/// different trait-object coercions of the same allocation compare equal.
#[must_use]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}
