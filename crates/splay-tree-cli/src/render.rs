//! ASCII tree drawing.
//!
//! Every subtree is laid out as a block of equal-width lines. A parent's
//! label sits above its children with `_` runs reaching towards the
//! children's label columns and `/` / `\` connectors one line below:
//!
//! ```text
//!   _5_
//!  /   \
//!  3   8
//! / \ / \
//! 1 4 7 9
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use splay_tree::{Bst, NodeId, TreeError};

/// Placeholder printed for an empty tree.
pub const EMPTY: &str = "(empty)";

struct Block {
    lines: Vec<String>,
    width: usize,
    /// Column of the subtree root's label centre.
    middle: usize,
}

fn pad(n: usize, c: char) -> String {
    std::iter::repeat(c).take(n).collect()
}

/// Lays out the subtree under `root` bottom-up with an explicit stack.
fn layout<E: Display>(bst: &Bst<E>, root: NodeId) -> Result<Block, TreeError> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = bst.node(id)?;
        stack.extend(node.left());
        stack.extend(node.right());
        order.push(id);
    }

    // Pre-order reversed visits every child before its parent.
    let mut done: HashMap<NodeId, Block> = HashMap::with_capacity(order.len());
    for &id in order.iter().rev() {
        let node = bst.node(id)?;
        let left = node.left().and_then(|l| done.remove(&l));
        let right = node.right().and_then(|r| done.remove(&r));
        done.insert(id, join(node.element().to_string(), left, right));
    }
    done.remove(&root).ok_or(TreeError::StaleNode(root))
}

/// Places `label` above the blocks of its children.
fn join(label: String, left: Option<Block>, right: Option<Block>) -> Block {
    let u = label.len();
    match (left, right) {
        (None, None) => Block {
            middle: u / 2,
            width: u,
            lines: vec![label],
        },
        (Some(l), None) => {
            let (n, x) = (l.width, l.middle);
            let mut lines = vec![
                format!("{}{}{label}", pad(x + 1, ' '), pad(n - x - 1, '_')),
                format!("{}/{}", pad(x, ' '), pad(n - x - 1 + u, ' ')),
            ];
            lines.extend(l.lines.into_iter().map(|line| line + &pad(u, ' ')));
            Block {
                lines,
                width: n + u,
                middle: n + u / 2,
            }
        }
        (None, Some(r)) => {
            let (n, x) = (r.width, r.middle);
            let mut lines = vec![
                format!("{label}{}{}", pad(x, '_'), pad(n - x, ' ')),
                format!("{}\\{}", pad(u + x, ' '), pad(n - x - 1, ' ')),
            ];
            lines.extend(r.lines.into_iter().map(|line| pad(u, ' ') + &line));
            Block {
                lines,
                width: n + u,
                middle: u / 2,
            }
        }
        (Some(mut l), Some(mut r)) => {
            let (n, x) = (l.width, l.middle);
            let (m, y) = (r.width, r.middle);
            let mut lines = vec![
                format!(
                    "{}{}{label}{}{}",
                    pad(x + 1, ' '),
                    pad(n - x - 1, '_'),
                    pad(y, '_'),
                    pad(m - y, ' ')
                ),
                format!(
                    "{}/{}\\{}",
                    pad(x, ' '),
                    pad(n - x - 1 + u + y, ' '),
                    pad(m - y - 1, ' ')
                ),
            ];
            let height = l.lines.len().max(r.lines.len());
            l.lines.resize(height, pad(n, ' '));
            r.lines.resize(height, pad(m, ' '));
            let gap = pad(u, ' ');
            lines.extend(l.lines.into_iter().zip(r.lines).map(|(a, b)| a + &gap + &b));
            Block {
                lines,
                width: n + m + u,
                middle: n + u / 2,
            }
        }
    }
}

/// Draws the tree, one string per output line with trailing blanks removed.
pub fn render_lines<E: Display>(bst: &Bst<E>) -> Result<Vec<String>, TreeError> {
    let Some(root) = bst.root() else {
        return Ok(vec![EMPTY.to_string()]);
    };
    let block = layout(bst, root)?;
    Ok(block.lines.into_iter().map(|line| line.trim_end().to_string()).collect())
}

pub fn render<E: Display>(bst: &Bst<E>) -> Result<String, TreeError> {
    Ok(render_lines(bst)?.join("\n"))
}
