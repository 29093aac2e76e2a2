//! YAML description of an object tree.
//!
//! A tree document is a nested mapping. Each node may set:
//!
//! - `kind`: `folder` or `item` (inferred when omitted)
//! - `children`: mapping of child name to node (folders only)
//! - `value`: text payload (items only)
//! - `located`: whether the node maintains its own name and parent
//!
//! ```yaml
//! children:
//!   docs:
//!     children:
//!       guide: { value: "Read me" }
//!   api:
//!     located: true
//!     children: {}
//! ```
//!
//! The root is always built as located with no name and no parent.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{Folder, Item};
use crate::error::{Error, Result};
use crate::location::Location;
use crate::node::NodeRef;
use crate::traversal::VIEW_MARKER;

/// The two node shapes a document can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A container ([`Folder`]).
    Folder,
    /// A leaf ([`Item`]).
    Item,
}

/// One node of a tree document, and recursively its children.
///
/// # Examples
///
/// ```
/// use locus::{NodeKind, TreeDocument};
///
/// let doc = TreeDocument::from_yaml("children: { readme: { value: hi } }").unwrap();
/// assert_eq!(doc.kind(), NodeKind::Folder);
/// assert_eq!(doc.children["readme"].kind(), NodeKind::Item);
/// assert_eq!(doc.node_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDocument {
    /// Explicit node kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,

    /// Named children.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, TreeDocument>,

    /// Whether the node's name and parent are authoritative.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub located: bool,

    /// Payload for items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TreeDocument {
    /// Parse a document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the text is not a valid document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Read and parse a document file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist, and
    /// [`Error::InvalidTree`] if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::not_found(format!("tree {}", path.display())));
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidTree {
            path: path.to_path_buf(),
            reason: format!("Failed to read file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::InvalidTree {
            path: path.to_path_buf(),
            reason: format!("Failed to parse YAML: {e}"),
        })
    }

    /// The node kind, explicit or inferred.
    ///
    /// Without an explicit kind, a node with children or without a value is
    /// a folder, and a node with only a value is an item.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.kind {
            Some(kind) => kind,
            None if self.children.is_empty() && self.value.is_some() => NodeKind::Item,
            None => NodeKind::Folder,
        }
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TreeDocument::node_count)
            .sum::<usize>()
    }

    /// Check the document for shapes that cannot be built or reached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending node when an item
    /// has children, a folder has a value, or a child name could never be
    /// produced by path splitting (empty, contains `/`, `.`, `..`, or starts
    /// with the view marker).
    pub fn validate(&self) -> Result<()> {
        self.validate_at("/")
    }

    fn validate_at(&self, at: &str) -> Result<()> {
        match self.kind() {
            NodeKind::Item if !self.children.is_empty() => {
                return Err(Error::Validation {
                    field: at.to_string(),
                    message: "items cannot have children".into(),
                });
            }
            NodeKind::Folder if self.value.is_some() => {
                return Err(Error::Validation {
                    field: at.to_string(),
                    message: "folders cannot carry a value".into(),
                });
            }
            _ => {}
        }

        for (name, child) in &self.children {
            let child_at = if at == "/" {
                format!("/{name}")
            } else {
                format!("{at}/{name}")
            };
            Self::validate_child_name(&child_at, name)?;
            child.validate_at(&child_at)?;
        }

        Ok(())
    }

    fn validate_child_name(at: &str, name: &str) -> Result<()> {
        let problem = if name.is_empty() {
            Some("child names cannot be empty")
        } else if name.contains('/') {
            Some("child names cannot contain '/'")
        } else if name == "." || name == ".." {
            Some("'.' and '..' cannot be used as child names")
        } else if name.starts_with(VIEW_MARKER) {
            Some("child names cannot start with the view marker '@@'")
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: at.to_string(),
                message: message.into(),
            }),
            None => Ok(()),
        }
    }

    /// Validate the document and build it into an object graph.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the document is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use locus::{TreeDocument, Traverser};
    ///
    /// let doc = TreeDocument::from_yaml("children: { docs: { children: { guide: {} } } }").unwrap();
    /// let root = doc.build().unwrap();
    ///
    /// let resolution = Traverser::new(root).traverse("/docs/guide/@@edit").unwrap();
    /// assert_eq!(resolution.traversed, vec!["docs", "guide"]);
    /// assert_eq!(resolution.view_name, "edit");
    /// ```
    pub fn build(&self) -> Result<NodeRef> {
        self.validate()?;
        Ok(self.build_node(None, None))
    }

    fn build_node(&self, name: Option<&str>, parent: Option<&NodeRef>) -> NodeRef {
        let location = if self.located || parent.is_none() {
            Location::provided(name.map(str::to_owned), parent)
        } else {
            Location::new()
        };

        match self.kind() {
            NodeKind::Item => Arc::new(Item {
                value: self.value.clone(),
                location,
            }),
            NodeKind::Folder => {
                let folder = Arc::new(Folder {
                    children: RwLock::default(),
                    location,
                });
                let folder_ref: NodeRef = folder.clone();
                for (child_name, child) in &self.children {
                    let node = child.build_node(Some(child_name), Some(&folder_ref));
                    folder.insert(child_name.clone(), node);
                }
                folder_ref
            }
        }
    }
}
