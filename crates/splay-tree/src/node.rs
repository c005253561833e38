use crate::types::{Node, NodeId};

/// A tree vertex stored in the arena.
///
/// Links are readable through the accessors below; only the owning tree can
/// change them.
#[derive(Clone, Debug)]
pub struct BstNode<E> {
    pub(crate) p: Option<NodeId>,
    pub(crate) l: Option<NodeId>,
    pub(crate) r: Option<NodeId>,
    pub(crate) element: E,
    // False once the node has been deleted; the slot waits on the free list
    // until the next insert reuses it.
    pub(crate) live: bool,
}

impl<E> BstNode<E> {
    pub(crate) fn new(element: E) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            element,
            live: true,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn left(&self) -> Option<NodeId> {
        self.l
    }

    pub fn right(&self) -> Option<NodeId> {
        self.r
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.p
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }

    /// Clears all links and marks the slot free.
    pub(crate) fn release(&mut self) {
        self.p = None;
        self.l = None;
        self.r = None;
        self.live = false;
    }
}

impl<E> Node for BstNode<E> {
    fn p(&self) -> Option<NodeId> {
        self.p
    }

    fn l(&self) -> Option<NodeId> {
        self.l
    }

    fn r(&self) -> Option<NodeId> {
        self.r
    }

    fn set_p(&mut self, v: Option<NodeId>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<NodeId>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<NodeId>) {
        self.r = v;
    }
}
