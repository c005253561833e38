//! Rotations and splaying.
//!
//! All functions take the arena and node indices and return the (possibly
//! new) root. A splay is built from single rotations only, so the number of
//! rotations it performs is exactly the work the cost layer reports.

use tracing::trace;

use crate::types::{Node, NodeId};
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

// ── single rotations ──────────────────────────────────────────────────────

/// Right rotation around `node`: its left child `c` takes its place.
///
/// ```text
///       node          c
///      /    \        / \
///     c      z  →   x   node
///    / \               /    \
///   x   b             b      z
/// ```
///
/// Updates the promoted child's parent (node's old parent), node's parent
/// (the promoted child) and the transferred subtree `b`'s parent (node).
/// A node without a left child is left untouched.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let Some(c) = get_l(arena, node) else {
        return root;
    };
    let p = get_p(arena, node);
    let b = get_r(arena, c);
    set_l(arena, node, b);
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }
    set_r(arena, c, Some(node));
    set_p(arena, node, Some(c));
    set_p(arena, c, p);
    trace!(node, promoted = c, "rotate right");
    replace_child(arena, root, p, node, Some(c))
}

/// Left rotation around `node`: its right child takes its place.
///
/// Mirror image of [`rotate_right`].
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let Some(c) = get_r(arena, node) else {
        return root;
    };
    let p = get_p(arena, node);
    let b = get_l(arena, c);
    set_r(arena, node, b);
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }
    set_l(arena, c, Some(node));
    set_p(arena, node, Some(c));
    set_p(arena, c, p);
    trace!(node, promoted = c, "rotate left");
    replace_child(arena, root, p, node, Some(c))
}

// ── splay steps ───────────────────────────────────────────────────────────

/// Splay step chosen by a node's position under its parent and grandparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Parent is the root: one rotation.
    Zig,
    /// Node and parent are children on the same side: two rotations,
    /// grandparent first.
    ZigZig,
    /// Node and parent are children on opposite sides: two rotations,
    /// parent first.
    ZigZag,
}

impl Step {
    /// Number of single rotations this step performs.
    pub fn rotations(self) -> usize {
        match self {
            Step::Zig => 1,
            Step::ZigZig | Step::ZigZag => 2,
        }
    }
}

/// Classifies the next splay step for `node`, or `None` when it is the root.
pub fn step<N: Node>(arena: &[N], node: NodeId) -> Option<Step> {
    let p = get_p(arena, node)?;
    let Some(g) = get_p(arena, p) else {
        return Some(Step::Zig);
    };
    let node_is_left = get_l(arena, p) == Some(node);
    let parent_is_left = get_l(arena, g) == Some(p);
    if node_is_left == parent_is_left {
        Some(Step::ZigZig)
    } else {
        Some(Step::ZigZag)
    }
}

/// Rotates `node`'s parent so that `node` moves up one level.
fn rotate_up<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let Some(p) = get_p(arena, node) else {
        return root;
    };
    if get_l(arena, p) == Some(node) {
        rotate_right(arena, root, p)
    } else {
        rotate_left(arena, root, p)
    }
}

/// Zig: parent is the root, rotate it away from `node`.
pub fn zig<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    rotate_up(arena, root, node)
}

/// Zig-zig: rotate the grandparent, then the new parent, in the same
/// direction.
pub fn zig_zig<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let Some(p) = get_p(arena, node) else {
        return root;
    };
    let root = rotate_up(arena, root, p);
    rotate_up(arena, root, node)
}

/// Zig-zag: rotate the parent away from `node`, then rotate the former
/// grandparent (now `node`'s parent) the other way.
pub fn zig_zag<N: Node>(arena: &mut [N], root: Option<NodeId>, node: NodeId) -> Option<NodeId> {
    let root = rotate_up(arena, root, node);
    rotate_up(arena, root, node)
}

// ── top-level splay ───────────────────────────────────────────────────────

/// Result of [`splay`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Splayed {
    pub root: Option<NodeId>,
    /// Single rotations performed.
    pub rotations: usize,
}

/// Moves `node` to the root with zig / zig-zig / zig-zag steps.
///
/// Each step lifts `node` by one or two levels, so the loop ends once it has
/// no parent.
pub fn splay<N: Node>(arena: &mut [N], mut root: Option<NodeId>, node: NodeId) -> Splayed {
    let mut rotations = 0;
    while let Some(step) = step(arena, node) {
        root = match step {
            Step::Zig => zig(arena, root, node),
            Step::ZigZig => zig_zig(arena, root, node),
            Step::ZigZag => zig_zag(arena, root, node),
        };
        rotations += step.rotations();
        trace!(node, ?step, "splay step");
    }
    Splayed { root, rotations }
}
