//! Operation-sequence files.
//!
//! Each non-blank line is a batch of whitespace-separated tokens; a token is
//! an integer immediately followed by `+` (insert) or `-` (delete):
//!
//! ```text
//! 5+ 3+ 8+
//! 3- 9+
//! ```

use std::fs;
use std::path::Path;

use splay_tree::{Bst, SplayTree};
use tracing::debug;

use crate::error::WorkloadError;
use crate::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(Element),
    Delete(Element),
}

impl Op {
    fn parse(token: &str, line: usize) -> Result<Self, WorkloadError> {
        let invalid = || WorkloadError::InvalidToken {
            line,
            token: token.to_string(),
        };
        let (digits, insert) = if let Some(d) = token.strip_suffix('+') {
            (d, true)
        } else if let Some(d) = token.strip_suffix('-') {
            (d, false)
        } else {
            return Err(invalid());
        };
        let element = digits.parse::<Element>().map_err(|_| invalid())?;
        Ok(if insert {
            Op::Insert(element)
        } else {
            Op::Delete(element)
        })
    }
}

/// Parses a sequence file's contents into one batch of operations per
/// non-blank line.
pub fn parse_sequence(src: &str) -> Result<Vec<Vec<Op>>, WorkloadError> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| line.split_whitespace().map(|t| Op::parse(t, i + 1)).collect())
        .collect()
}

pub fn load_sequence(path: &Path) -> Result<Vec<Vec<Op>>, WorkloadError> {
    let src = fs::read_to_string(path).map_err(|source| WorkloadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sequence(&src)
}

/// A plain tree and a splay tree receiving the same operations.
#[derive(Debug, Default)]
pub struct TreePair {
    pub bst: Bst<Element>,
    pub splay: SplayTree<Element>,
}

impl TreePair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, op: Op) {
        match op {
            Op::Insert(e) => {
                self.bst.insert(e);
                self.splay.insert(e);
            }
            Op::Delete(e) => {
                let removed = self.bst.delete(&e).is_some();
                self.splay.delete(&e);
                debug!(element = e, removed, "delete");
            }
        }
    }

    pub fn apply_all<'a, I: IntoIterator<Item = &'a Op>>(&mut self, ops: I) {
        for op in ops {
            self.apply(*op);
        }
    }
}
