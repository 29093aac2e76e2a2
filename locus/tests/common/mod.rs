//! Common test utilities for integration tests.
//!
//! This module provides node fixtures for testing the locus library.

use std::sync::Arc;

use locus::{Container, Error, Location, Node, NodeRef, Result};

/// A container that answers every lookup with the same child, or with
/// "not found" when it has none.
#[derive(Debug, Default)]
pub struct Dummy {
    next: Option<NodeRef>,
    location: Location,
}

impl Dummy {
    /// A dummy with no child: every lookup misses.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A dummy whose every lookup yields `next`.
    pub fn to(next: &NodeRef) -> Arc<Self> {
        Arc::new(Self {
            next: Some(Arc::clone(next)),
            location: Location::new(),
        })
    }

    /// The location slot, for presetting ancestry.
    #[allow(dead_code)]
    pub fn slot(&self) -> &Location {
        &self.location
    }
}

impl Container for Dummy {
    fn lookup(&self, name: &str) -> Result<NodeRef> {
        self.next.clone().ok_or_else(|| Error::not_found(name))
    }
}

impl Node for Dummy {
    fn container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn location(&self) -> Option<&Location> {
        Some(&self.location)
    }
}

/// A node with neither capability.
#[derive(Debug)]
pub struct Opaque;

impl Node for Opaque {}

/// The name recorded on `node`, if any.
#[allow(dead_code)]
pub fn name_of(node: &NodeRef) -> Option<String> {
    node.location().and_then(Location::name)
}

/// The parent recorded on `node`, if any.
#[allow(dead_code)]
pub fn parent_of(node: &NodeRef) -> Option<NodeRef> {
    node.location().and_then(Location::parent)
}
