//! Node identity and the node registry.
//!
//! A node is anything that can name itself with a stable string identifier.
//! The engine never looks past [`Node::id`]: two handles with the same
//! identifier are the same node, whatever they point to.

use std::{rc::Rc, sync::Arc};

use indexmap::IndexMap;

use crate::error::TopoError;

/// A vertex of a [`Topology`](crate::Topology), identified by [`Node::id`].
///
/// The identifier must not change while the node is part of a topology.
pub trait Node {
    fn id(&self) -> &str;
}

impl Node for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Node + ?Sized> Node for Rc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Node + ?Sized> Node for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// The set of nodes of a topology, keyed by identifier.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct Nodes<N> {
    set: IndexMap<String, N>,
}

impl<N> Default for Nodes<N> {
    fn default() -> Self {
        Nodes {
            set: IndexMap::new(),
        }
    }
}

impl<N: Node> Nodes<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node`, failing with [`TopoError::NodeExists`] if its
    /// identifier is already taken. The registry is untouched on failure.
    pub fn add(&mut self, node: N) -> Result<(), TopoError<N>> {
        if self.has(&node) {
            return Err(TopoError::NodeExists {
                id: node.id().to_owned(),
            });
        }
        self.set.insert(node.id().to_owned(), node);
        Ok(())
    }

    pub fn has(&self, node: &impl Node) -> bool {
        self.set.contains_key(node.id())
    }

    pub fn get(&self, id: &str) -> Option<&N> {
        self.set.get(id)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.set.values()
    }
}
