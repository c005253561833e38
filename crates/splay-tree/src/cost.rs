//! Access-cost instrumentation.
//!
//! [`FindWithCost`] is implemented separately by [`Bst`] and [`SplayTree`];
//! [`CostMeter`] wraps either one and keeps running totals. Counting never
//! changes which node is returned or the shape the tree ends up in.

use crate::bst::Bst;
use crate::splay_tree::SplayTree;
use crate::types::NodeId;

/// Lookup that reports what it cost.
pub trait FindWithCost<E> {
    /// Returns the node holding `element` (if any) and the cost of the
    /// access.
    ///
    /// - [`Bst`]: one per step from a node down to its child, so a hit on
    ///   the root costs 0 and a hit at depth `d` costs `d`. A miss costs the
    ///   steps taken before the search ran out of children.
    /// - [`SplayTree`]: the same steps plus the single rotations
    ///   performed while splaying a found node to the root.
    fn find_with_cost(&mut self, element: &E) -> (Option<NodeId>, usize);
}

impl<E: Ord> FindWithCost<E> for Bst<E> {
    fn find_with_cost(&mut self, element: &E) -> (Option<NodeId>, usize) {
        self.locate(element)
    }
}

impl<E: Ord> FindWithCost<E> for SplayTree<E> {
    fn find_with_cost(&mut self, element: &E) -> (Option<NodeId>, usize) {
        self.search_with_cost(element)
    }
}

/// Accumulates [`FindWithCost`] results over a sequence of accesses.
#[derive(Clone, Debug, Default)]
pub struct CostMeter<T> {
    tree: T,
    total: usize,
    accesses: usize,
    hits: usize,
}

impl<T> CostMeter<T> {
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            total: 0,
            accesses: 0,
            hits: 0,
        }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn into_inner(self) -> T {
        self.tree
    }

    /// Sum of all access costs so far.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn accesses(&self) -> usize {
        self.accesses
    }

    /// Accesses that found their element.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Mean cost per access; 0 before the first access.
    pub fn mean(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.total as f64 / self.accesses as f64
        }
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.accesses = 0;
        self.hits = 0;
    }

    pub fn access<E>(&mut self, element: &E) -> Option<NodeId>
    where
        T: FindWithCost<E>,
    {
        let (node, cost) = self.tree.find_with_cost(element);
        self.total += cost;
        self.accesses += 1;
        if node.is_some() {
            self.hits += 1;
        }
        node
    }

    /// Accesses every element in order and returns the cost of this batch.
    pub fn access_all<'a, E, I>(&mut self, elements: I) -> usize
    where
        E: 'a,
        I: IntoIterator<Item = &'a E>,
        T: FindWithCost<E>,
    {
        let before = self.total;
        for element in elements {
            self.access(element);
        }
        self.total - before
    }
}
