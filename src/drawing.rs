//! # Drawing sorted topologies
//!
//! Renders a topology as a [Graphviz](https://graphviz.org) digraph with two
//! clusters: `cluster_orig` holds the edges as they were given, and
//! `cluster_sort` lays the sorted nodes out left to right (chained by
//! invisible edges) with the original edges drawn over them. An edge that bends
//! backwards in the second cluster would be a sorting bug.
//!
//! The module also turns a [`CycleDiagnostic`] into a short list of edges worth
//! looking at.

use std::fmt::{self, Display, Write};

use ahash::{HashSet, HashSetExt};
use itertools::Itertools;

use crate::{edge::Edge, node::Node, topology::CycleDiagnostic};

/// DOT rendering of a sorted order and its edges. Use `to_string` or
/// [`render_sorted`].
pub struct SortedDot<'a, N> {
    pub order: &'a [N],
    pub edges: &'a [Edge<N>],
}

pub fn render_sorted<N: Node>(order: &[N], edges: &[Edge<N>]) -> String {
    SortedDot { order, edges }.to_string()
}

impl<N: Node> Display for SortedDot<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;

        writeln!(f, "  subgraph cluster_orig {{")?;
        for e in self.edges {
            writeln!(f, "    {} -> {};", Quoted(e.from.id()), Quoted(e.to.id()))?;
        }
        writeln!(f, "  }}")?;

        writeln!(f, "  subgraph cluster_sort {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    edge[style=invis];")?;
        let mut last: Option<&N> = None;
        for n in self.order {
            writeln!(f, "    {} [label={}];", Sorted(n.id()), Quoted(n.id()))?;
            if let Some(l) = last {
                writeln!(f, "    {} -> {};", Sorted(l.id()), Sorted(n.id()))?;
            }
            last = Some(n);
        }
        writeln!(f, "    edge[style=solid, constraint=false];")?;
        for e in self.edges {
            writeln!(f, "    {} -> {};", Sorted(e.from.id()), Sorted(e.to.id()))?;
        }
        writeln!(f, "  }}")?;

        write!(f, "}}")
    }
}

/// A DOT string literal.
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        write_escaped(f, self.0)?;
        f.write_char('"')
    }
}

/// The id of a node's copy inside `cluster_sort`.
struct Sorted<'a>(&'a str);

impl Display for Sorted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        write_escaped(f, self.0)?;
        f.write_str("_sort\"")
    }
}

fn write_escaped(f: &mut impl Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    Ok(())
}

/// Edges to look at when a sort fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleCandidates {
    /// Every edge the sort could not consume, as `(from, to)`.
    pub residual: Vec<(String, String)>,
    /// Residual edges whose reverse is also an edge: two node cycles and self
    /// loops. Each pair is listed once.
    pub mutual: Vec<(String, String)>,
}

pub fn cycle_candidates<N: Node>(diagnostic: &CycleDiagnostic<N>) -> CycleCandidates {
    let original: HashSet<(&str, &str)> =
        diagnostic.original_edges().iter().map(Edge::ids).collect();
    let owned = |(from, to): (&str, &str)| (from.to_owned(), to.to_owned());

    let residual = diagnostic.remaining_iter().map(Edge::ids).map(owned).collect_vec();

    let mut seen = HashSet::new();
    let mutual = diagnostic
        .remaining_iter()
        .map(Edge::ids)
        .filter(|&(from, to)| original.contains(&(to, from)))
        .filter(|&(from, to)| seen.insert(if from <= to { (from, to) } else { (to, from) }))
        .map(owned)
        .collect_vec();

    CycleCandidates { residual, mutual }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::edgelist::parse_topology;

    fn pairs(p: &[(&str, &str)]) -> Vec<(String, String)> {
        p.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn fan_out_dot() {
        let list = parse_topology("a -> b\na -> c").unwrap();
        let order = list.topology.sort().unwrap();
        let dot = render_sorted(&order, &list.edges);

        insta::assert_snapshot!(dot, @r#"
        digraph G {
          subgraph cluster_orig {
            "a" -> "b";
            "a" -> "c";
          }
          subgraph cluster_sort {
            rankdir=LR;
            edge[style=invis];
            "a_sort" [label="a"];
            "b_sort" [label="b"];
            "a_sort" -> "b_sort";
            "c_sort" [label="c"];
            "b_sort" -> "c_sort";
            edge[style=solid, constraint=false];
            "a_sort" -> "b_sort";
            "a_sort" -> "c_sort";
          }
        }
        "#);
    }

    #[test]
    fn rendered_dot_parses() {
        let list = parse_topology(
            "
            fetch sources -> build-all
            build-all -> test
            build-all -> package
            package -> 1.0 release
            ",
        )
        .unwrap();
        let order = list.topology.sort().unwrap();
        let dot = render_sorted(&order, &list.edges);

        assert!(
            dot_parser::ast::Graph::try_from(dot.as_str()).is_ok(),
            "not valid DOT:\n{dot}"
        );
    }

    #[test]
    fn ids_are_escaped() {
        assert_eq!(Quoted(r#"say "hi""#).to_string(), r#""say \"hi\"""#);
        assert_eq!(Sorted(r"a\b").to_string(), r#""a\\b_sort""#);
    }

    #[test]
    fn empty_topology_dot() {
        let dot = render_sorted::<String>(&[], &[]);
        assert_eq!(dot.lines().next(), Some("digraph G {"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn two_node_cycle_candidates() {
        let list = parse_topology("a -> b\nb -> a\nc -> a").unwrap();
        let diagnostic = list.topology.sort().unwrap_err().into_cycle().unwrap();

        let candidates = cycle_candidates(&diagnostic);
        assert_eq!(candidates.residual, pairs(&[("a", "b"), ("b", "a")]));
        assert_eq!(candidates.mutual, pairs(&[("a", "b")]));
    }

    #[test]
    fn longer_cycles_only_show_up_as_residual() {
        let list = parse_topology("s -> a\na -> b\nb -> c\nc -> a\nc -> c").unwrap();
        let diagnostic = list.topology.sort().unwrap_err().into_cycle().unwrap();

        let candidates = cycle_candidates(&diagnostic);
        assert_eq!(
            candidates.residual,
            pairs(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "c")])
        );
        assert_eq!(candidates.mutual, pairs(&[("c", "c")]));
    }
}
