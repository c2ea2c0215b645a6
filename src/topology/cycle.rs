use crate::edge::{Edge, Edges};

/// What was left when Kahn's algorithm ran out of nodes with no incoming edges.
///
/// Both edge sets are snapshots owned by the diagnostic; the topology that
/// produced them can keep changing afterwards.
#[derive(Debug, Clone)]
pub struct CycleDiagnostic<N> {
    original: Edges<N>,
    remaining: Edges<N>,
}

impl<N: Clone> CycleDiagnostic<N> {
    /// Snapshots `original`; `remaining` is the sort's private working set
    /// and is taken as is.
    pub(crate) fn new(original: &Edges<N>, remaining: Edges<N>) -> Self {
        CycleDiagnostic {
            original: original.copy(),
            remaining,
        }
    }
}

impl<N> CycleDiagnostic<N> {
    /// Every edge of the topology at the time of the sort.
    pub fn original_edges(&self) -> &Edges<N> {
        &self.original
    }

    /// Edges never consumed by the sort. Every cycle of the topology lies
    /// within this set, though not every edge in it is on a cycle.
    pub fn remaining_edges(&self) -> &Edges<N> {
        &self.remaining
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.count()
    }

    pub fn original_count(&self) -> usize {
        self.original.count()
    }

    pub fn remaining_iter(&self) -> impl Iterator<Item = &Edge<N>> {
        self.remaining.iter()
    }

    pub fn into_parts(self) -> (Edges<N>, Edges<N>) {
        (self.original, self.remaining)
    }
}
