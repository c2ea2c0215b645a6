//! # toposort
//!
//! Topological sorting of explicit directed graphs.
//!
//! Build a [`Topology`] out of caller-owned nodes (anything implementing
//! [`Node`]) and directed edges, then ask it for an order in which every edge
//! points forward. Sorting uses Kahn's algorithm. When the graph has a cycle,
//! the error carries the full edge set and the edges the algorithm could not
//! consume, so the caller can go looking for the cycle.
//!
//! Besides the engine, the crate has the pieces of the `topoviz` tool: an
//! [`edgelist`] parser for `a -> b` text and a [`drawing`] module that renders
//! a sorted topology as a Graphviz digraph.

pub mod drawing;
pub mod edge;
pub mod edgelist;
pub mod error;
pub mod node;
pub mod topology;

pub use edge::{Edge, Edges, EdgesFromNode};
pub use error::TopoError;
pub use node::{Node, Nodes};
pub use topology::{CycleDiagnostic, Frontier, SortOptions, Topology};
