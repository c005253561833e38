//! Drivers that feed operation sequences and access lists into a plain
//! [`Bst`](splay_tree::Bst) and a [`SplayTree`](splay_tree::SplayTree) side by
//! side.
//!
//! - [`sequence`] — `5+ 3+ 5-` operation files, applied to both trees.
//! - [`access`] — integer access lists, replayed through
//!   [`CostMeter`](splay_tree::CostMeter)s.
//! - [`workload`] — reproducible shuffled permutations for building trees.
//! - [`render`] — multi-line ASCII drawing of a tree.

pub mod access;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod sequence;
pub mod workload;

pub use error::WorkloadError;

/// Element type used by every driver.
pub type Element = i64;
