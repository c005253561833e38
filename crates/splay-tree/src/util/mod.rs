//! Link-only tree helpers.
//!
//! Everything here walks `p` / `l` / `r` links through the [`Node`] trait and
//! never looks at elements, so the same functions serve the plain tree, the
//! splay tree and the rotation code.

use crate::types::{Node, NodeId};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node of the subtree rooted at `curr`.
pub fn leftmost<N: Node>(arena: &[N], mut curr: NodeId) -> NodeId {
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    curr
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<NodeId>) -> Option<NodeId> {
    root.map(|r| leftmost(arena, r))
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<NodeId>) -> Option<NodeId> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
///
/// With a right subtree this is its leftmost node. Otherwise walk up until
/// the current node is a left child and return that parent; running out of
/// parents means `curr` holds the maximum.
pub fn next<N: Node>(arena: &[N], mut curr: NodeId) -> Option<NodeId> {
    if let Some(r) = get_r(arena, curr) {
        return Some(leftmost(arena, r));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: NodeId) -> Option<NodeId> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Number of levels under `root` (0 for an empty tree).
pub fn height<N: Node>(arena: &[N], root: Option<NodeId>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(NodeId, usize)> = root.into_iter().map(|r| (r, 1)).collect();
    while let Some((idx, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Number of edges between `node` and the root.
pub fn depth<N: Node>(arena: &[N], mut node: NodeId) -> usize {
    let mut d = 0;
    while let Some(p) = get_p(arena, node) {
        node = p;
        d += 1;
    }
    d
}

/// Points whichever slot of `parent` held `old` at `new`.
///
/// Returns the new root: `new` when `old` had no parent, `root` otherwise.
/// The caller is responsible for `new`'s own parent link.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<NodeId>,
    parent: Option<NodeId>,
    old: NodeId,
    new: Option<NodeId>,
) -> Option<NodeId> {
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
        None => new,
    }
}
