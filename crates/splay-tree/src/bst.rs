use std::cmp::Ordering;
use std::fmt::Display;

use tracing::debug;

use crate::error::TreeError;
use crate::node::BstNode;
use crate::types::NodeId;
use crate::util::{first, get_l, get_p, get_r, height, last, leftmost, next, prev, replace_child, set_l, set_p, set_r};

/// Where a descent for an element ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Occupied(NodeId),
    /// Empty child slot the element would be attached to; `parent` is `None`
    /// only for an empty tree.
    Vacant {
        parent: Option<NodeId>,
        side: Ordering,
    },
}

/// Outcome of removing an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Removal {
    /// The node the element was found in.
    pub node: NodeId,
    /// That node's parent before the removal.
    pub parent: Option<NodeId>,
}

/// Binary search tree over a totally ordered element type.
///
/// Duplicates are never stored: inserting an element that is already present
/// returns the existing node.
#[derive(Clone, Debug)]
pub struct Bst<E> {
    pub(crate) root: Option<NodeId>,
    pub(crate) arena: Vec<BstNode<E>>,
    free: Vec<NodeId>,
    size: usize,
}

impl<E> Default for Bst<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Bst<E> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            free: Vec::new(),
            size: 0,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.free.clear();
        self.size = 0;
    }

    /// Node currently linked into the tree.
    pub fn node(&self, id: NodeId) -> Result<&BstNode<E>, TreeError> {
        self.arena
            .get(id as usize)
            .filter(|n| n.live)
            .ok_or(TreeError::StaleNode(id))
    }

    /// Element stored in slot `id`, live or not.
    ///
    /// A node removed by [`Bst::delete`] keeps its element here until the
    /// next insert reuses the slot.
    pub fn element(&self, id: NodeId) -> Option<&E> {
        self.arena.get(id as usize).map(|n| &n.element)
    }

    pub fn find_min(&self) -> Result<NodeId, TreeError> {
        first(&self.arena, self.root).ok_or(TreeError::EmptyTree)
    }

    pub fn find_max(&self) -> Result<NodeId, TreeError> {
        last(&self.arena, self.root).ok_or(TreeError::EmptyTree)
    }

    /// In-order successor of `node`; `Ok(None)` when `node` holds the maximum.
    pub fn successor(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.node(node)?;
        Ok(next(&self.arena, node))
    }

    /// In-order predecessor of `node`; `Ok(None)` when `node` holds the
    /// minimum.
    pub fn predecessor(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.node(node)?;
        Ok(prev(&self.arena, node))
    }

    /// Number of levels; 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Removes the minimum element and returns the slot it occupied.
    pub fn delete_min(&mut self) -> Result<NodeId, TreeError> {
        let min = self.find_min()?;
        Ok(self.remove_node(min).node)
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
            remaining: self.size,
        }
    }

    fn alloc(&mut self, element: E) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.arena[id as usize] = BstNode::new(element);
                id
            }
            None => {
                self.arena.push(BstNode::new(element));
                (self.arena.len() - 1) as NodeId
            }
        }
    }

    /// Replaces `node` with `child` in its parent's slot and frees `node`.
    fn splice(&mut self, node: NodeId, child: Option<NodeId>) {
        let parent = get_p(&self.arena, node);
        if let Some(c) = child {
            set_p(&mut self.arena, c, parent);
        }
        self.root = replace_child(&mut self.arena, self.root, parent, node, child);
        self.arena[node as usize].release();
        self.free.push(node);
        self.size -= 1;
    }

    fn swap_elements(&mut self, a: NodeId, b: NodeId) {
        let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
        let (head, tail) = self.arena.split_at_mut(hi);
        std::mem::swap(&mut head[lo].element, &mut tail[0].element);
    }

    /// Unlinks the element held by `node`.
    ///
    /// With two children the successor's node is the one freed: its element
    /// moves into `node`, and the removed element ends up in the freed slot.
    pub(crate) fn remove_node(&mut self, node: NodeId) -> Removal {
        let parent = get_p(&self.arena, node);
        match (get_l(&self.arena, node), get_r(&self.arena, node)) {
            (Some(_), Some(r)) => {
                let successor = leftmost(&self.arena, r);
                debug!(node, successor, "delete: two children, promoting successor");
                let successor_right = get_r(&self.arena, successor);
                self.splice(successor, successor_right);
                self.swap_elements(node, successor);
            }
            (None, Some(child)) | (Some(child), None) => {
                debug!(node, child, "delete: one child");
                self.splice(node, Some(child));
            }
            (None, None) => {
                debug!(node, "delete: leaf");
                self.splice(node, None);
            }
        }
        Removal { node, parent }
    }

    /// Debug dump, one node per line.
    pub fn to_string(&self, tab: &str) -> String
    where
        E: Display,
    {
        let Some(root) = self.root else {
            return "Bst ∅".to_string();
        };
        let mut s = "Bst".to_string();
        let mut stack = vec![(root, tab.to_string(), "└─")];
        while let Some((node, indent, side)) = stack.pop() {
            let n = &self.arena[node as usize];
            s.push_str(&format!("\n{indent}{side} {}", n.element));
            let child_indent = format!("{indent}  ");
            if let Some(r) = n.r {
                stack.push((r, child_indent.clone(), "→"));
            }
            if let Some(l) = n.l {
                stack.push((l, child_indent, "←"));
            }
        }
        s
    }
}

impl<E: Ord> Bst<E> {
    /// Walks from the root towards `element`, counting the steps taken down
    /// to a child. A hit on the root takes 0 steps; a miss counts the steps
    /// made before the missing child.
    pub(crate) fn descend(&self, element: &E) -> (Slot, usize) {
        let mut steps = 0;
        let mut parent = None;
        let mut side = Ordering::Equal;
        let mut curr = self.root;
        while let Some(i) = curr {
            side = element.cmp(&self.arena[i as usize].element);
            let child = match side {
                Ordering::Equal => return (Slot::Occupied(i), steps),
                Ordering::Less => get_l(&self.arena, i),
                Ordering::Greater => get_r(&self.arena, i),
            };
            if child.is_some() {
                steps += 1;
            }
            parent = Some(i);
            curr = child;
        }
        (Slot::Vacant { parent, side }, steps)
    }

    /// Inserts `element` as a new leaf, or returns the node already holding
    /// it.
    pub fn insert(&mut self, element: E) -> NodeId {
        let (parent, side) = match self.descend(&element).0 {
            Slot::Occupied(existing) => return existing,
            Slot::Vacant { parent, side } => (parent, side),
        };
        let node = self.alloc(element);
        match parent {
            None => self.root = Some(node),
            Some(p) => {
                set_p(&mut self.arena, node, Some(p));
                if side == Ordering::Less {
                    set_l(&mut self.arena, p, Some(node));
                } else {
                    set_r(&mut self.arena, p, Some(node));
                }
            }
        }
        self.size += 1;
        node
    }

    pub fn find(&self, element: &E) -> Option<NodeId> {
        self.locate(element).0
    }

    /// Like [`Bst::find`], also reporting how many steps down the tree the
    /// search took.
    pub fn locate(&self, element: &E) -> (Option<NodeId>, usize) {
        match self.descend(element) {
            (Slot::Occupied(node), steps) => (Some(node), steps),
            (Slot::Vacant { .. }, steps) => (None, steps),
        }
    }

    pub fn contains(&self, element: &E) -> bool {
        self.find(element).is_some()
    }

    /// Removes `element`, returning the node it was found in.
    ///
    /// When that node has two children it stays in the tree and now holds its
    /// successor's element; otherwise it is unlinked.
    pub fn delete(&mut self, element: &E) -> Option<NodeId> {
        self.remove(element).map(|r| r.node)
    }

    pub(crate) fn remove(&mut self, element: &E) -> Option<Removal> {
        match self.descend(element).0 {
            Slot::Occupied(node) => Some(self.remove_node(node)),
            Slot::Vacant { .. } => None,
        }
    }

    /// Checks ordering, parent links and the cached size.
    pub fn assert_valid(&self) -> Result<(), String> {
        let mut count = 0;
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        if let Some(root) = self.root {
            let n = self.node(root).map_err(|e| e.to_string())?;
            if let Some(p) = n.p {
                return Err(format!("root {root} has parent {p}"));
            }
        }
        while let Some(i) = stack.pop() {
            count += 1;
            if count > self.size {
                return Err(format!("more than {} reachable nodes", self.size));
            }
            let n = self.node(i).map_err(|e| e.to_string())?;
            for c in [n.l, n.r].into_iter().flatten() {
                let child = self.node(c).map_err(|e| e.to_string())?;
                if child.p != Some(i) {
                    return Err(format!("node {c} has parent {:?}, expected {i}", child.p));
                }
                stack.push(c);
            }
        }
        if count != self.size {
            return Err(format!("size is {} but {count} nodes are reachable", self.size));
        }
        let mut prev: Option<&E> = None;
        for element in self.iter() {
            if prev.is_some_and(|p| p >= element) {
                return Err("in-order elements are not strictly increasing".to_string());
            }
            prev = Some(element);
        }
        Ok(())
    }
}

/// In-order iterator over elements.
pub struct Iter<'a, E> {
    arena: &'a [BstNode<E>],
    curr: Option<NodeId>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = next(self.arena, idx);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&self.arena[idx as usize].element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> IntoIterator for &'a Bst<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
