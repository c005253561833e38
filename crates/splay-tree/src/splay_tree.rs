use std::ops::Deref;

use tracing::debug;

use crate::bst::{Bst, Removal};
use crate::error::TreeError;
use crate::splay::splay;
use crate::types::NodeId;

/// A [`Bst`] that splays after every access.
///
/// `insert` and a successful `search` leave the touched node at the root;
/// `delete` splays the parent of the node the element was found in.
///
/// Dereferences to the underlying [`Bst`] for read-only queries. `find`
/// reached that way does not splay; use [`SplayTree::search`] for that.
#[derive(Clone, Debug)]
pub struct SplayTree<E> {
    bst: Bst<E>,
}

impl<E> Default for SplayTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Deref for SplayTree<E> {
    type Target = Bst<E>;

    fn deref(&self) -> &Bst<E> {
        &self.bst
    }
}

impl<E> SplayTree<E> {
    pub fn new() -> Self {
        Self { bst: Bst::new() }
    }

    pub fn into_bst(self) -> Bst<E> {
        self.bst
    }

    pub fn clear(&mut self) {
        self.bst.clear();
    }

    /// Moves `node` to the root and returns how many rotations it took.
    pub fn splay(&mut self, node: NodeId) -> Result<usize, TreeError> {
        self.bst.node(node)?;
        Ok(self.splay_live(node))
    }

    fn splay_live(&mut self, node: NodeId) -> usize {
        let splayed = splay(&mut self.bst.arena, self.bst.root, node);
        self.bst.root = splayed.root;
        splayed.rotations
    }

    fn splay_removal(&mut self, removal: Removal) {
        if let Some(parent) = removal.parent {
            let rotations = self.splay_live(parent);
            debug!(node = removal.node, parent, rotations, "splayed deletion point");
        }
    }

    /// Removes the minimum element as [`Bst::delete_min`] does. Nothing is
    /// splayed.
    pub fn delete_min(&mut self) -> Result<NodeId, TreeError> {
        self.bst.delete_min()
    }
}

impl<E: Ord> SplayTree<E> {
    /// Inserts `element` (or finds the node already holding it) and splays
    /// that node to the root.
    pub fn insert(&mut self, element: E) -> NodeId {
        let node = self.bst.insert(element);
        self.splay_live(node);
        node
    }

    /// Finds `element` and splays it to the root.
    pub fn search(&mut self, element: &E) -> Option<NodeId> {
        let node = self.bst.find(element)?;
        self.splay_live(node);
        Some(node)
    }

    /// Search that also reports cost: steps taken while descending plus
    /// rotations made while splaying.
    pub(crate) fn search_with_cost(&mut self, element: &E) -> (Option<NodeId>, usize) {
        match self.bst.locate(element) {
            (Some(node), steps) => (Some(node), steps + self.splay_live(node)),
            miss => miss,
        }
    }

    /// Removes `element` and splays the parent of the node it was found in.
    ///
    /// Returns that node, as [`Bst::delete`] does.
    pub fn delete(&mut self, element: &E) -> Option<NodeId> {
        let removal = self.bst.remove(element)?;
        self.splay_removal(removal);
        Some(removal.node)
    }
}

impl<E> From<Bst<E>> for SplayTree<E> {
    fn from(bst: Bst<E>) -> Self {
        Self { bst }
    }
}
