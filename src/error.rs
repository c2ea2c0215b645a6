use thiserror::Error;

use crate::topology::cycle::CycleDiagnostic;

#[derive(Debug, Error)]
pub enum TopoError<N> {
    #[error("node {id:?} already exists in topology")]
    NodeExists { id: String },

    #[error("node {id:?} does not exist in topology")]
    NodeDoesNotExist { id: String },

    #[error("topology has a cycle: {} of {} edge(s) could not be consumed", .0.remaining_count(), .0.original_count())]
    CycleInTopology(Box<CycleDiagnostic<N>>),

    #[error("sort runtime exceeded bound: {iterations} iterations, bound {bound}")]
    RuntimeExceeded { iterations: usize, bound: usize },
}

impl<N> TopoError<N> {
    /// The diagnostic payload, if this is a cycle failure.
    pub fn cycle(&self) -> Option<&CycleDiagnostic<N>> {
        match self {
            TopoError::CycleInTopology(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_cycle(self) -> Option<CycleDiagnostic<N>> {
        match self {
            TopoError::CycleInTopology(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, TopoError::CycleInTopology(_))
    }
}
