//! Ready-made nodes for building object trees.
//!
//! Applications with their own domain objects implement [`Node`] directly.
//! For everything else (tests, fixtures, the CLI) this module provides a
//! [`Folder`] container and an [`Item`] leaf, plus a YAML
//! [`TreeDocument`] format to describe a whole tree at once.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use locus::{Folder, Item, NodeRef, Traverser};
//!
//! let root: NodeRef = Arc::new(
//!     Folder::located()
//!         .with_child("readme", Arc::new(Item::with_value("hello")))
//!         .with_child("docs", Arc::new(Folder::new())),
//! );
//!
//! let resolution = Traverser::new(root).traverse("/readme/raw").unwrap();
//! assert_eq!(resolution.view_name, "raw");
//! ```

mod document;

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::node::{Container, Node, NodeRef};

pub use document::{NodeKind, TreeDocument};

/// A container node with named children.
#[derive(Debug, Default)]
pub struct Folder {
    children: RwLock<BTreeMap<String, NodeRef>>,
    location: Location,
}

impl Folder {
    /// An empty folder without location data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty folder that declares its (absent) name and parent
    /// authoritative, as a root does.
    #[must_use]
    pub fn located() -> Self {
        Self {
            children: RwLock::default(),
            location: Location::provided(None, None),
        }
    }

    /// Add a child, builder style.
    #[must_use]
    pub fn with_child(self, name: impl Into<String>, child: NodeRef) -> Self {
        self.insert(name, child);
        self
    }

    /// Add or replace a child, returning the replaced one.
    pub fn insert(&self, name: impl Into<String>, child: NodeRef) -> Option<NodeRef> {
        self.children.write().insert(name.into(), child)
    }

    /// Remove a child.
    pub fn remove(&self, name: &str) -> Option<NodeRef> {
        self.children.write().remove(name)
    }

    /// Child names in order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.children.read().keys().cloned().collect()
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.read().len()
    }

    /// Whether the folder has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.read().is_empty()
    }
}

impl Container for Folder {
    fn lookup(&self, name: &str) -> Result<NodeRef> {
        self.children
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }
}

impl Node for Folder {
    fn container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

/// A leaf node, optionally carrying a text payload.
#[derive(Debug, Default)]
pub struct Item {
    value: Option<String>,
    location: Location,
}

impl Item {
    /// An empty item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An item carrying `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            location: Location::new(),
        }
    }

    /// The payload, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Node for Item {
    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}
