//! Directed edges, grouped by origin.
//!
//! [`Edges`] is a two level map: origin id → ([`EdgesFromNode`]: destination id → [`Edge`]).
//! Keying by the ordered pair of identifiers means a repeated `from -> to`
//! collapses into a single edge. A bucket can outlive its last edge; every
//! query skips empty buckets.

use indexmap::IndexMap;

use crate::node::Node;

/// `from` must precede `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
}

impl<N: Node> Edge<N> {
    pub fn new(from: N, to: N) -> Self {
        Edge { from, to }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from.id() == self.to.id()
    }

    /// The `(from, to)` identifiers.
    pub fn ids(&self) -> (&str, &str) {
        (self.from.id(), self.to.id())
    }
}

/// The edges leaving a single node, keyed by destination id.
#[derive(Debug, Clone)]
pub struct EdgesFromNode<N> {
    edges: IndexMap<String, Edge<N>>,
}

impl<N> Default for EdgesFromNode<N> {
    fn default() -> Self {
        EdgesFromNode {
            edges: IndexMap::new(),
        }
    }
}

impl<N: Clone> EdgesFromNode<N> {
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<N> EdgesFromNode<N> {
    pub fn get(&self, to: &str) -> Option<&Edge<N>> {
        self.edges.get(to)
    }

    pub fn contains(&self, to: &str) -> bool {
        self.edges.contains_key(to)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge<N>> {
        self.edges.values()
    }
}

impl<N: Node> EdgesFromNode<N> {
    fn insert(&mut self, edge: Edge<N>) {
        self.edges.insert(edge.to.id().to_owned(), edge);
    }

    fn remove(&mut self, to: &str) -> Option<Edge<N>> {
        // shift_remove keeps the remaining edges in insertion order
        self.edges.shift_remove(to)
    }
}

/// Every edge of a topology, grouped by origin id.
#[derive(Debug, Clone)]
pub struct Edges<N> {
    buckets: IndexMap<String, EdgesFromNode<N>>,
}

impl<N> Default for Edges<N> {
    fn default() -> Self {
        Edges {
            buckets: IndexMap::new(),
        }
    }
}

impl<N: Clone> Edges<N> {
    /// Deep copy: the returned set shares no bucket with `self`.
    pub fn copy(&self) -> Self {
        Edges {
            buckets: self
                .buckets
                .iter()
                .map(|(k, b)| (k.clone(), b.copy()))
                .collect(),
        }
    }
}

impl<N: Node> Edges<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `from -> to`, replacing an existing edge between the same pair.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.buckets
            .entry(from.id().to_owned())
            .or_default()
            .insert(Edge::new(from, to));
    }

    /// Registers `from` as an origin without giving it any edges.
    pub fn touch(&mut self, from: &impl Node) {
        self.buckets.entry(from.id().to_owned()).or_default();
    }

    /// Removes `from -> to`. The bucket of `from` stays, even if now empty.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Option<Edge<N>> {
        self.buckets.get_mut(from)?.remove(to)
    }

    pub fn has_incoming(&self, node: &impl Node) -> bool {
        let id = node.id();
        self.buckets
            .values()
            .filter(|b| !b.is_empty())
            .any(|b| b.contains(id))
    }
}

impl<N> Edges<N> {
    pub fn count(&self) -> usize {
        self.buckets
            .values()
            .filter(|b| !b.is_empty())
            .map(EdgesFromNode::len)
            .sum()
    }

    pub fn outgoing(&self, from: &str) -> Option<&EdgesFromNode<N>> {
        self.buckets.get(from)
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.outgoing(from).is_some_and(|b| b.contains(to))
    }

    /// Number of origin buckets, empty ones included.
    pub fn origins(&self) -> usize {
        self.buckets.len()
    }

    /// All edges, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Edge<N>> {
        self.buckets.values().flat_map(EdgesFromNode::iter)
    }
}
