use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
};

use crate::node::Node;

/// How the sort picks the next node among those with no incoming edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Frontier {
    /// Smallest identifier first. The result does not depend on the order in
    /// which nodes and edges were added.
    #[default]
    Lexicographic,
    /// First admitted, first out. Nodes that start out eligible are admitted in
    /// the order they were added to the topology.
    Fifo,
}

/// Orders a node handle by its identifier alone.
pub(super) struct ById<N>(N);

impl<N: Node> PartialEq for ById<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl<N: Node> Eq for ById<N> {}

impl<N: Node> PartialOrd for ById<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> Ord for ById<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.id().cmp(other.0.id())
    }
}

pub(super) enum Queue<N> {
    Heap(BinaryHeap<Reverse<ById<N>>>),
    Fifo(VecDeque<N>),
}

impl<N: Node> Queue<N> {
    pub(super) fn new(frontier: Frontier) -> Self {
        match frontier {
            Frontier::Lexicographic => Queue::Heap(BinaryHeap::new()),
            Frontier::Fifo => Queue::Fifo(VecDeque::new()),
        }
    }

    pub(super) fn push(&mut self, node: N) {
        match self {
            Queue::Heap(h) => h.push(Reverse(ById(node))),
            Queue::Fifo(q) => q.push_back(node),
        }
    }

    pub(super) fn pop(&mut self) -> Option<N> {
        match self {
            Queue::Heap(h) => h.pop().map(|Reverse(ById(n))| n),
            Queue::Fifo(q) => q.pop_front(),
        }
    }
}

impl<N: Node> Extend<N> for Queue<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for n in iter {
            self.push(n);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain(mut q: Queue<String>) -> Vec<String> {
        std::iter::from_fn(|| q.pop()).collect()
    }

    #[test]
    fn heap_pops_smallest_id() {
        let mut q = Queue::new(Frontier::Lexicographic);
        q.extend(["c", "a", "b"].map(String::from));
        assert_eq!(drain(q), ["a", "b", "c"]);
    }

    #[test]
    fn fifo_keeps_admission_order() {
        let mut q = Queue::new(Frontier::Fifo);
        q.extend(["c", "a", "b"].map(String::from));
        assert_eq!(drain(q), ["c", "a", "b"]);
    }
}
