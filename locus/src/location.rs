//! Location (ancestry) bookkeeping for nodes.
//!
//! A [`Location`] records the name a node was reached by and a weak link to
//! its parent. The link is never an ownership edge: parents own their
//! children through the application's containers, children only point back.
//!
//! A location is *provided* when the node declares that its name and parent
//! are authoritative (the node maintains them itself). A location is
//! *located* when it is provided or already carries a parent. Traversal
//! fixup only ever writes to locations that are not located, and it writes
//! name and parent together under a single lock.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::node::{Node, NodeRef};

#[derive(Default)]
struct Slot {
    name: Option<String>,
    parent: Option<Weak<dyn Node>>,
    provided: bool,
}

/// Name and parent slot carried by a node.
///
/// # Examples
///
/// ```
/// use locus::Location;
///
/// let location = Location::new();
/// assert!(!location.is_located());
///
/// let root = Location::provided(None, None);
/// assert!(root.is_located());
/// assert!(root.parent().is_none());
/// ```
#[derive(Default)]
pub struct Location {
    slot: RwLock<Slot>,
}

impl Location {
    /// An empty, unmarked location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A location whose name and parent are authoritative.
    #[must_use]
    pub fn provided(name: Option<String>, parent: Option<&NodeRef>) -> Self {
        Self {
            slot: RwLock::new(Slot {
                name,
                parent: parent.map(Arc::downgrade),
                provided: true,
            }),
        }
    }

    /// Mark this location as authoritative.
    pub fn provide(&self) {
        self.slot.write().provided = true;
    }

    /// Whether this location was marked authoritative.
    #[must_use]
    pub fn is_provided(&self) -> bool {
        self.slot.read().provided
    }

    /// Whether this location already participates in a location chain.
    #[must_use]
    pub fn is_located(&self) -> bool {
        let slot = self.slot.read();
        slot.provided || slot.parent.is_some()
    }

    /// The recorded name, if any.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.slot.read().name.clone()
    }

    /// The recorded parent, if any and still alive.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef> {
        self.slot.read().parent.as_ref().and_then(Weak::upgrade)
    }

    /// Overwrite the recorded name.
    pub fn set_name(&self, name: Option<String>) {
        self.slot.write().name = name;
    }

    /// Overwrite the recorded parent.
    pub fn set_parent(&self, parent: Option<&NodeRef>) {
        self.slot.write().parent = parent.map(Arc::downgrade);
    }

    /// Record `name` and `parent` unless the location is already located.
    ///
    /// Returns whether anything was written.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use locus::{Folder, Location, NodeRef};
    ///
    /// let parent: NodeRef = Arc::new(Folder::new());
    /// let location = Location::new();
    ///
    /// assert!(location.attach("child", &parent));
    /// assert_eq!(location.name().as_deref(), Some("child"));
    ///
    /// // Second attach is ignored: the first one made it located.
    /// assert!(!location.attach("other", &parent));
    /// assert_eq!(location.name().as_deref(), Some("child"));
    /// ```
    pub fn attach(&self, name: &str, parent: &NodeRef) -> bool {
        let mut slot = self.slot.write();
        if slot.provided || slot.parent.is_some() {
            return false;
        }
        slot.name = Some(name.to_owned());
        slot.parent = Some(Arc::downgrade(parent));
        true
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("Location")
            .field("name", &slot.name)
            .field("has_parent", &slot.parent.is_some())
            .field("provided", &slot.provided)
            .finish()
    }
}

/// Iterate from `node` back to the root along parent links.
///
/// The node itself is yielded first. Iteration ends at a node without a
/// location, without a live parent, or when a node would repeat.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use locus::{lineage, Folder, NodeRef, Traverser};
///
/// let child: NodeRef = Arc::new(Folder::new());
/// let root: NodeRef = Arc::new(Folder::located().with_child("docs", Arc::clone(&child)));
///
/// Traverser::new(Arc::clone(&root)).traverse("/docs").unwrap();
///
/// let names: Vec<_> = lineage(&child)
///     .map(|n| n.location().and_then(|l| l.name()))
///     .collect();
/// assert_eq!(names, vec![Some("docs".to_string()), None]);
/// ```
#[must_use]
pub fn lineage(node: &NodeRef) -> Lineage {
    Lineage {
        next: Some(Arc::clone(node)),
        seen: HashSet::new(),
    }
}

/// Iterator returned by [`lineage`].
pub struct Lineage {
    next: Option<NodeRef>,
    seen: HashSet<*const ()>,
}

impl Iterator for Lineage {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(Arc::as_ptr(&current).cast::<()>()) {
            return None;
        }
        self.next = current.location().and_then(Location::parent);
        Some(current)
    }
}
