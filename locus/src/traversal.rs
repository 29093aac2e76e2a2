//! Object-graph traversal.
//!
//! The [`Traverser`] maps a request path onto a node of the object graph.
//! Starting at the root it resolves one segment at a time through each
//! node's child-lookup capability, and stops at the first of:
//!
//! - a segment carrying the explicit view marker (`@@name`)
//! - a node that cannot look up children
//! - a segment the current node has no child for
//! - the end of the path
//!
//! The node where the walk stopped becomes the *context*; the segment that
//! stopped it (if any) becomes the *view name* and everything after it the
//! *subpath*.
//!
//! Before returning, ancestry fixup records the name and parent of nodes
//! that do not already participate in a location chain, according to the
//! configured [`FixupMode`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use locus::{same_node, Folder, NodeRef, StopReason, Traverser};
//!
//! let docs: NodeRef = Arc::new(Folder::new());
//! let root: NodeRef = Arc::new(Folder::located().with_child("docs", Arc::clone(&docs)));
//!
//! let resolution = Traverser::new(root).traverse("/docs/edit/42").unwrap();
//! assert!(same_node(&resolution.context, &docs));
//! assert_eq!(resolution.view_name, "edit");
//! assert_eq!(resolution.subpath, vec!["42"]);
//! assert_eq!(resolution.stop, StopReason::LookupMiss);
//! ```

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::NodeRef;
use crate::path::split_path;

/// Prefix forcing the rest of a segment to be read as a view name.
pub const VIEW_MARKER: &str = "@@";

/// Which nodes receive ancestry fixup after a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FixupMode {
    /// Every node reached by a successful lookup, in walk order.
    #[default]
    Chain,
    /// Only the final context.
    Context,
    /// No fixup at all.
    Off,
}

impl fmt::Display for FixupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain => write!(f, "chain"),
            Self::Context => write!(f, "context"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every segment was resolved (or there were none).
    Exhausted,
    /// The current node has no child-lookup capability.
    NotTraversable,
    /// The current node has no child for the segment.
    LookupMiss,
    /// The segment carried the explicit view marker.
    ViewMarker,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "exhausted"),
            Self::NotTraversable => write!(f, "not traversable"),
            Self::LookupMiss => write!(f, "lookup miss"),
            Self::ViewMarker => write!(f, "view marker"),
        }
    }
}

/// Outcome of a traversal.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The node where the walk stopped.
    pub context: NodeRef,
    /// The segment interpreted as a view name, or empty.
    pub view_name: String,
    /// Segments after the view name, unresolved.
    pub subpath: Vec<String>,
    /// Segments consumed by successful lookups.
    pub traversed: Vec<String>,
    /// Why the walk ended.
    pub stop: StopReason,
}

impl Resolution {
    /// Split into the `(context, view_name, subpath)` triple.
    #[must_use]
    pub fn into_parts(self) -> (NodeRef, String, Vec<String>) {
        (self.context, self.view_name, self.subpath)
    }
}

/// Resolves request paths against a root node.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use locus::{FixupMode, Folder, Traverser};
///
/// let traverser = Traverser::new(Arc::new(Folder::located()))
///     .with_fixup(FixupMode::Context);
/// assert_eq!(traverser.fixup(), FixupMode::Context);
/// ```
#[derive(Debug, Clone)]
pub struct Traverser {
    root: NodeRef,
    fixup: FixupMode,
}

impl Traverser {
    /// Create a traverser rooted at `root` with chain fixup.
    #[must_use]
    pub fn new(root: NodeRef) -> Self {
        Self {
            root,
            fixup: FixupMode::default(),
        }
    }

    /// Configure which nodes receive ancestry fixup.
    #[must_use]
    pub fn with_fixup(mut self, fixup: FixupMode) -> Self {
        self.fixup = fixup;
        self
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// The configured fixup mode.
    #[must_use]
    pub fn fixup(&self) -> FixupMode {
        self.fixup
    }

    /// Split `path` and resolve it.
    ///
    /// # Errors
    ///
    /// Returns the error of a child lookup that failed for any reason other
    /// than the child being absent. Malformed or empty paths never fail.
    pub fn traverse(&self, path: &str) -> Result<Resolution> {
        self.traverse_segments(split_path(path))
    }

    /// Resolve an already split sequence of segments.
    ///
    /// Segments are used verbatim: no decoding or dot handling is applied.
    ///
    /// # Errors
    ///
    /// Same as [`Traverser::traverse`].
    pub fn traverse_segments<I, S>(&self, segments: I) -> Result<Resolution>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut remaining = segments.into_iter().map(Into::<String>::into);
        let mut context = Arc::clone(&self.root);
        let mut visited = vec![Arc::clone(&self.root)];
        let mut traversed = Vec::new();
        let mut view_name = String::new();
        let mut stop = StopReason::Exhausted;

        for segment in remaining.by_ref() {
            if let Some(name) = segment.strip_prefix(VIEW_MARKER) {
                view_name = name.to_owned();
                stop = StopReason::ViewMarker;
                break;
            }

            let Some(container) = context.container() else {
                view_name = segment;
                stop = StopReason::NotTraversable;
                break;
            };

            let looked_up = container.lookup(&segment);
            match looked_up {
                Ok(child) => {
                    log::trace!("resolved segment '{segment}'");
                    traversed.push(segment);
                    visited.push(Arc::clone(&child));
                    context = child;
                }
                Err(err) if err.is_not_found() => {
                    view_name = segment;
                    stop = StopReason::LookupMiss;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let subpath: Vec<String> = remaining.collect();
        log::debug!(
            "traversal stopped ({stop}) after {} segment(s), view '{view_name}', {} in subpath",
            traversed.len(),
            subpath.len()
        );

        self.apply_fixup(&visited, &traversed);

        Ok(Resolution {
            context,
            view_name,
            subpath,
            traversed,
            stop,
        })
    }

    /// Record ancestry on the walked nodes.
    ///
    /// `visited[i + 1]` was reached from `visited[i]` through `traversed[i]`.
    fn apply_fixup(&self, visited: &[NodeRef], traversed: &[String]) {
        let steps = visited.windows(2).zip(traversed);
        match self.fixup {
            FixupMode::Off => {}
            FixupMode::Chain => {
                for (pair, name) in steps {
                    attach(&pair[1], name, &pair[0]);
                }
            }
            FixupMode::Context => {
                if let Some((pair, name)) = steps.last() {
                    attach(&pair[1], name, &pair[0]);
                }
            }
        }
    }
}

fn attach(node: &NodeRef, name: &str, parent: &NodeRef) {
    if let Some(location) = node.location() {
        if location.attach(name, parent) {
            log::trace!("attached '{name}' to its traversal parent");
        }
    }
}

/// Resolve `path` from `root` with the default fixup mode.
///
/// # Errors
///
/// Same as [`Traverser::traverse`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use locus::{traverse, same_node, Folder, NodeRef};
///
/// let root: NodeRef = Arc::new(Folder::located());
/// let (context, view_name, subpath) = traverse(&root, "").unwrap().into_parts();
/// assert!(same_node(&context, &root));
/// assert!(view_name.is_empty());
/// assert!(subpath.is_empty());
/// ```
pub fn traverse(root: &NodeRef, path: &str) -> Result<Resolution> {
    Traverser::new(Arc::clone(root)).traverse(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::location::Location;
    use crate::node::{same_node, Container, Node};

    /// Container whose every lookup yields the same single child.
    #[derive(Debug, Default)]
    struct Chain {
        next: Option<NodeRef>,
        location: Location,
    }

    impl Chain {
        fn to(next: &NodeRef) -> Self {
            Self {
                next: Some(Arc::clone(next)),
                location: Location::new(),
            }
        }
    }

    impl Container for Chain {
        fn lookup(&self, name: &str) -> Result<NodeRef> {
            self.next.clone().ok_or_else(|| Error::not_found(name))
        }
    }

    impl Node for Chain {
        fn container(&self) -> Option<&dyn Container> {
            Some(self)
        }

        fn location(&self) -> Option<&Location> {
            Some(&self.location)
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl Node for Opaque {}

    #[test]
    fn test_empty_path_returns_root() {
        let root: NodeRef = Arc::new(Chain::default());
        let resolution = Traverser::new(Arc::clone(&root)).traverse("").unwrap();

        assert!(same_node(&resolution.context, &root));
        assert_eq!(resolution.view_name, "");
        assert!(resolution.subpath.is_empty());
        assert!(resolution.traversed.is_empty());
        assert_eq!(resolution.stop, StopReason::Exhausted);
    }

    #[test]
    fn test_root_without_lookup() {
        let root: NodeRef = Arc::new(Opaque);
        let resolution = traverse(&root, "/foo/bar").unwrap();

        assert!(same_node(&resolution.context, &root));
        assert_eq!(resolution.view_name, "foo");
        assert_eq!(resolution.subpath, vec!["bar"]);
        assert_eq!(resolution.stop, StopReason::NotTraversable);
    }

    #[test]
    fn test_stops_on_leaf_after_resolving() {
        let leaf: NodeRef = Arc::new(Opaque);
        let root: NodeRef = Arc::new(Chain::to(&leaf));
        let resolution = traverse(&root, "/leaf/view/rest").unwrap();

        assert!(same_node(&resolution.context, &leaf));
        assert_eq!(resolution.view_name, "view");
        assert_eq!(resolution.subpath, vec!["rest"]);
        assert_eq!(resolution.traversed, vec!["leaf"]);
        assert_eq!(resolution.stop, StopReason::NotTraversable);
    }

    #[test]
    fn test_view_marker_wins_over_missing_capability() {
        let root: NodeRef = Arc::new(Opaque);
        let resolution = traverse(&root, "/@@edit/x").unwrap();

        assert_eq!(resolution.view_name, "edit");
        assert_eq!(resolution.subpath, vec!["x"]);
        assert_eq!(resolution.stop, StopReason::ViewMarker);
    }

    #[test]
    fn test_bare_marker_gives_empty_view_name() {
        let root: NodeRef = Arc::new(Chain::default());
        let resolution = traverse(&root, "/@@").unwrap();

        assert_eq!(resolution.view_name, "");
        assert_eq!(resolution.stop, StopReason::ViewMarker);
    }

    #[test]
    fn test_traverse_segments_skips_splitting() {
        let foo: NodeRef = Arc::new(Chain::default());
        let root: NodeRef = Arc::new(Chain::to(&foo));
        let resolution = Traverser::new(root)
            .traverse_segments(["a/b", "%20"])
            .unwrap();

        assert!(same_node(&resolution.context, &foo));
        assert_eq!(resolution.traversed, vec!["a/b"]);
        assert_eq!(resolution.view_name, "%20");
    }

    #[test]
    fn test_fixup_context_only_touches_final_node() {
        let c: NodeRef = Arc::new(Chain::default());
        let b: NodeRef = Arc::new(Chain::to(&c));
        let a: NodeRef = Arc::new(Chain::to(&b));

        Traverser::new(Arc::clone(&a))
            .with_fixup(FixupMode::Context)
            .traverse("/b/c")
            .unwrap();

        let c_location = c.location().unwrap();
        assert_eq!(c_location.name().as_deref(), Some("c"));
        assert!(same_node(&c_location.parent().unwrap(), &b));
        assert!(!b.location().unwrap().is_located());
    }

    #[test]
    fn test_fixup_off_writes_nothing() {
        let b: NodeRef = Arc::new(Chain::default());
        let a: NodeRef = Arc::new(Chain::to(&b));

        Traverser::new(a)
            .with_fixup(FixupMode::Off)
            .traverse("/b")
            .unwrap();

        assert!(!b.location().unwrap().is_located());
        assert!(b.location().unwrap().name().is_none());
    }

    #[test]
    fn test_fixup_never_touches_root() {
        let root: NodeRef = Arc::new(Chain::default());
        traverse(&root, "/missing").unwrap();
        assert!(!root.location().unwrap().is_located());
    }

    #[test]
    fn test_fixup_skips_nodes_without_location_slot() {
        let leaf: NodeRef = Arc::new(Opaque);
        let root: NodeRef = Arc::new(Chain::to(&leaf));
        let resolution = traverse(&root, "/leaf").unwrap();
        assert!(same_node(&resolution.context, &leaf));
        assert!(leaf.location().is_none());
    }

    #[test]
    fn test_self_cycle_terminates() {
        // A node that resolves every name to itself.
        #[derive(Debug)]
        struct Mirror {
            me: parking_lot::Mutex<Option<std::sync::Weak<Mirror>>>,
            location: Location,
        }

        impl Container for Mirror {
            fn lookup(&self, name: &str) -> Result<NodeRef> {
                let me = self.me.lock().as_ref().and_then(std::sync::Weak::upgrade);
                me.map(|m| m as NodeRef)
                    .ok_or_else(|| Error::not_found(name))
            }
        }

        impl Node for Mirror {
            fn container(&self) -> Option<&dyn Container> {
                Some(self)
            }

            fn location(&self) -> Option<&Location> {
                Some(&self.location)
            }
        }

        let mirror = Arc::new(Mirror {
            me: parking_lot::Mutex::new(None),
            location: Location::new(),
        });
        *mirror.me.lock() = Some(Arc::downgrade(&mirror));
        let root: NodeRef = mirror.clone();

        let resolution = traverse(&root, "/a/b/c").unwrap();
        assert!(same_node(&resolution.context, &root));
        assert_eq!(resolution.traversed, vec!["a", "b", "c"]);
        // Reaching the root again through a lookup fixes it up once.
        assert!(root.location().unwrap().is_located());
        assert_eq!(root.location().unwrap().name().as_deref(), Some("a"));
    }

    #[test]
    fn test_fixup_mode_display_and_serde() {
        assert_eq!(FixupMode::Chain.to_string(), "chain");
        assert_eq!(FixupMode::default(), FixupMode::Chain);
        let parsed: FixupMode = serde_yaml::from_str("context").unwrap();
        assert_eq!(parsed, FixupMode::Context);
    }

    #[test]
    fn test_stop_reason_serializes_snake_case() {
        let json = serde_json::to_string(&StopReason::NotTraversable).unwrap();
        assert_eq!(json, "\"not_traversable\"");
    }
}
