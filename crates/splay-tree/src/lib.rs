//! Arena-based binary search tree and splay tree.
//!
//! Nodes live in a `Vec` arena owned by the tree and every link (`p`, `l`,
//! `r`) is an `Option<u32>` index into it, so the parent back-reference is
//! never an owning pointer.
//!
//! - [`Bst`] — plain binary search tree: insert, find, min/max, in-order
//!   successor/predecessor and delete (two-child deletes promote the
//!   successor's value into the located node).
//! - [`SplayTree`] — a [`Bst`] that splays the touched node to the root after
//!   every insert, search and delete.
//! - [`cost`] — [`FindWithCost`] reports search steps (plus rotations for the
//!   splay tree) per access; [`CostMeter`] accumulates them.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`NodeId`] |
//! [`node`] | [`BstNode`] arena slot |
//! [`util`] | link-only helpers: `first`, `last`, `next`, `prev`, `height` |
//! [`splay`] | `rotate_left`, `rotate_right`, zig / zig-zig / zig-zag, `splay` |
//! [`bst`] | [`Bst`] |
//! [`splay_tree`] | [`SplayTree`] |
//! [`cost`] | [`FindWithCost`], [`CostMeter`] |

pub mod bst;
pub mod cost;
pub mod error;
pub mod node;
pub mod splay;
pub mod splay_tree;
pub mod types;
pub mod util;

pub use bst::{Bst, Iter};
pub use cost::{CostMeter, FindWithCost};
pub use error::TreeError;
pub use node::BstNode;
pub use splay::{rotate_left, rotate_right, splay, Splayed, Step};
pub use splay_tree::SplayTree;
pub use types::{Node, NodeId};
