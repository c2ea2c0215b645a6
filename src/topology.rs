//! # Topology
//!
//! A [`Topology`] is a registry of nodes plus the directed edges between them.
//! It is built up with [`Topology::add_node`] and [`Topology::add_edge`] and
//! then queried with [`Topology::sort`], which runs Kahn's algorithm:
//!
//! ```text
//! L <- empty list of sorted nodes
//! S <- all nodes with no incoming edge
//! while S is non-empty:
//!     remove a node n from S and append it to L
//!     for each edge n -> m:
//!         remove the edge
//!         if m has no other incoming edge, insert m into S
//! if edges remain: the graph has at least one cycle
//! else: L is a topological order
//! ```
//!
//! Edges are removed from a private copy of the edge set, so a topology can be
//! sorted any number of times and stays usable after a failed sort. When edges
//! remain, the error carries a [`CycleDiagnostic`] with both the full and the
//! residual edge set.
//!
//! ```
//! use toposort::Topology;
//!
//! let mut t = Topology::new();
//! for id in ["shirt", "tie", "jacket"] {
//!     t.add_node(id.to_string()).unwrap();
//! }
//! t.add_edge("shirt".to_string(), "tie".to_string()).unwrap();
//! t.add_edge("tie".to_string(), "jacket".to_string()).unwrap();
//!
//! let order = t.sort().unwrap();
//! assert_eq!(order, ["shirt", "tie", "jacket"]);
//! ```

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{
    edge::Edges,
    error::TopoError,
    node::{Node, Nodes},
};

pub mod cycle;
pub use cycle::CycleDiagnostic;

mod frontier;
pub use frontier::Frontier;
use frontier::Queue;


/// Knobs for [`Topology::sort_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub frontier: Frontier,
    /// Replaces the default iteration bound of `2 * (nodes + edges)`.
    pub max_iterations: Option<usize>,
}

impl SortOptions {
    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Topology<N> {
    nodes: Nodes<N>,
    edges: Edges<N>,
}

impl<N> Default for Topology<N> {
    fn default() -> Self {
        Topology {
            nodes: Nodes::default(),
            edges: Edges::default(),
        }
    }
}

impl<N: Node + Clone> Topology<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: N) -> Result<(), TopoError<N>> {
        self.nodes.add(node)
    }

    /// Adds `from -> to`. Both ends must already be nodes of the topology.
    pub fn add_edge(&mut self, from: N, to: N) -> Result<(), TopoError<N>> {
        if let Some(missing) = [&from, &to].into_iter().find(|n| !self.nodes.has(*n)) {
            return Err(TopoError::NodeDoesNotExist {
                id: missing.id().to_owned(),
            });
        }
        self.edges.add_edge(from, to);
        Ok(())
    }

    pub fn nodes(&self) -> &Nodes<N> {
        &self.nodes
    }

    pub fn edges(&self) -> &Edges<N> {
        &self.edges
    }

    pub fn sort(&self) -> Result<Vec<N>, TopoError<N>> {
        self.sort_with(&SortOptions::default())
    }

    pub fn sort_with(&self, options: &SortOptions) -> Result<Vec<N>, TopoError<N>> {
        let bound = options.max_iterations.unwrap_or_else(|| 2 * self.bound());
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.count(),
            frontier = ?options.frontier,
            bound,
            "sorting topology"
        );

        let mut order = Vec::with_capacity(self.nodes.len());
        let mut frontier = Queue::new(options.frontier);
        frontier.extend(self.starts());

        let mut edges = self.edges.copy();
        let mut iterations = 0;

        while let Some(n) = frontier.pop() {
            trace!(node = n.id(), "visiting");

            let targets = edges
                .outgoing(n.id())
                .map(|b| b.iter().map(|e| e.to.id().to_owned()).sorted().collect_vec())
                .unwrap_or_default();

            for to in targets {
                let Some(edge) = edges.remove_edge(n.id(), &to) else {
                    continue;
                };
                if !edges.has_incoming(&edge.to) {
                    frontier.push(edge.to);
                }
            }
            order.push(n);

            iterations += 1;
            if iterations > bound {
                warn!(iterations, bound, "sort exceeded its iteration bound");
                return Err(TopoError::RuntimeExceeded { iterations, bound });
            }
        }

        let remaining = edges.count();
        if remaining > 0 {
            debug!(
                sorted = order.len(),
                remaining, "sort stalled with edges left, topology has a cycle"
            );
            return Err(TopoError::CycleInTopology(Box::new(CycleDiagnostic::new(
                &self.edges,
                edges,
            ))));
        }

        debug!(sorted = order.len(), "sorted topology");
        Ok(order)
    }

    fn bound(&self) -> usize {
        self.nodes.len() + self.edges.count()
    }

    /// Nodes with no incoming edge, in registry order.
    fn starts(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes
            .iter()
            .filter(|n| !self.edges.has_incoming(*n))
            .cloned()
    }
}
