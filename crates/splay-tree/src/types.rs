//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! All tree-manipulation functions take the arena as a slice and work with
//! indices.

/// Index of a node inside its tree's arena.
pub type NodeId = u32;

/// Binary tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<NodeId>;
    fn l(&self) -> Option<NodeId>;
    fn r(&self) -> Option<NodeId>;
    fn set_p(&mut self, v: Option<NodeId>);
    fn set_l(&mut self, v: Option<NodeId>);
    fn set_r(&mut self, v: Option<NodeId>);
}
