//! The `a -> b` edge-list format.
//!
//! One edge per line. Surrounding whitespace is trimmed and blank lines are
//! skipped. A node exists as soon as it is named on either side of an arrow.
//!
//! ```text
//! fetch -> build
//! build -> test
//!
//! build -> package
//! ```

use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::{edge::Edge, topology::Topology};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid line {line_number}: {line:?}, expected `<id> -> <id>`")]
    InvalidLine { line_number: usize, line: String },
}

/// A parsed edge list: the topology, plus the edges in the order they were
/// written (repeats included).
#[derive(Debug, Clone)]
pub struct EdgeList {
    pub topology: Topology<String>,
    pub edges: Vec<Edge<String>>,
}

impl FromStr for EdgeList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_topology(s)
    }
}

pub fn parse_topology(input: &str) -> Result<EdgeList, ParseError> {
    let mut topology = Topology::new();
    let mut edges = Vec::new();

    for (i, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let invalid = || ParseError::InvalidLine {
            line_number: i + 1,
            line: raw.to_owned(),
        };

        let mut parts = line.split("->");
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(invalid());
        }
        trace!(from, to, line = i + 1, "edge");

        let (from, to) = (from.to_owned(), to.to_owned());
        for node in [&from, &to] {
            if !topology.nodes().has(node) {
                topology.add_node(node.clone()).map_err(|_| invalid())?;
            }
        }
        topology
            .add_edge(from.clone(), to.clone())
            .map_err(|_| invalid())?;
        edges.push(Edge::new(from, to));
    }

    Ok(EdgeList { topology, edges })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_and_skips_blank_lines() {
        let list: EdgeList = "
            a -> b

              a->c
            c ->   d
        "
        .parse()
        .unwrap();

        let nodes: Vec<_> = list.topology.nodes().iter().map(String::as_str).collect();
        assert_eq!(nodes, ["a", "b", "c", "d"]);
        assert_eq!(list.topology.edges().count(), 3);
        assert_eq!(list.edges[1], Edge::new("a".to_string(), "c".to_string()));
    }

    #[test]
    fn keeps_repeated_edges_in_input_order() {
        let list = parse_topology("a -> b\na -> b\n").unwrap();
        assert_eq!(list.edges.len(), 2);
        assert_eq!(list.topology.edges().count(), 1);
    }

    #[test]
    fn rejects_lines_without_exactly_one_arrow() {
        for (input, bad) in [
            ("a -> b\nb c\n", 2),
            ("a -> b -> c", 1),
            ("\n\n -> b", 3),
            ("a ->", 1),
        ] {
            match parse_topology(input) {
                Err(ParseError::InvalidLine { line_number, .. }) => {
                    assert_eq!(line_number, bad, "{input:?}")
                }
                Ok(_) => panic!("{input:?} should not parse"),
            }
        }
    }

    #[test]
    fn error_message_names_the_line() {
        let err = parse_topology("x => y").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid line 1: \"x => y\", expected `<id> -> <id>`"
        );
    }

    #[test]
    fn empty_input_is_an_empty_topology() {
        let list = parse_topology("  \n\n").unwrap();
        assert!(list.edges.is_empty());
        assert!(list.topology.sort().unwrap().is_empty());
    }
}
