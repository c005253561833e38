//! Access-list files: whitespace or newline separated integers, looked up in
//! order through cost-counting trees.

use std::fs;
use std::path::Path;

use splay_tree::{Bst, CostMeter, SplayTree};
use tracing::info;

use crate::error::WorkloadError;
use crate::Element;

pub fn parse_access_list(src: &str) -> Result<Vec<Element>, WorkloadError> {
    let mut out = Vec::new();
    for (i, line) in src.lines().enumerate() {
        for token in line.split_whitespace() {
            let element = token.parse().map_err(|_| WorkloadError::InvalidElement {
                line: i + 1,
                token: token.to_string(),
            })?;
            out.push(element);
        }
    }
    Ok(out)
}

pub fn load_access_list(path: &Path) -> Result<Vec<Element>, WorkloadError> {
    let src = fs::read_to_string(path).map_err(|source| WorkloadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_access_list(&src)
}

/// Cost of replaying one access list against both trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessReport {
    pub accesses: usize,
    pub bst: usize,
    pub splay: usize,
}

/// A plain tree and a splay tree holding the same elements, each behind a
/// [`CostMeter`].
///
/// Trees keep the shape earlier lists left them in, so the splay tree carries
/// its adaptation from one list to the next.
#[derive(Debug)]
pub struct CostComparison {
    bst: CostMeter<Bst<Element>>,
    splay: CostMeter<SplayTree<Element>>,
}

impl CostComparison {
    /// Inserts `elements` in order into both trees.
    pub fn build<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut bst = Bst::new();
        let mut splay = SplayTree::new();
        for &e in elements {
            bst.insert(e);
            splay.insert(e);
        }
        info!(size = bst.len(), bst_height = bst.height(), splay_height = splay.height(), "trees built");
        Self {
            bst: CostMeter::new(bst),
            splay: CostMeter::new(splay),
        }
    }

    pub fn run(&mut self, list: &[Element]) -> AccessReport {
        let report = AccessReport {
            accesses: list.len(),
            bst: self.bst.access_all(list),
            splay: self.splay.access_all(list),
        };
        info!(accesses = report.accesses, bst = report.bst, splay = report.splay, "access list replayed");
        report
    }

    pub fn bst(&self) -> &Bst<Element> {
        self.bst.tree()
    }

    pub fn splay(&self) -> &SplayTree<Element> {
        self.splay.tree()
    }

    /// Totals over every list run so far, as `(bst, splay)`.
    pub fn totals(&self) -> (usize, usize) {
        (self.bst.total(), self.splay.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_and_newlines() {
        assert_eq!(parse_access_list("1 2\n3\t4\n\n 5 ").unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_access_list("").unwrap(), Vec::<Element>::new());
    }

    #[test]
    fn rejects_non_integers() {
        match parse_access_list("1\n2 x3") {
            Err(WorkloadError::InvalidElement { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn comparison_reports_both_costs() {
        let mut cmp = CostComparison::build(&[5, 3, 8, 1, 4, 7, 9]);
        // Splay inserts leave 9 at the root.
        let report = cmp.run(&[1]);
        assert_eq!(report.accesses, 1);
        assert_eq!(report.bst, 2);
        assert!(report.splay > 0);
        let again = cmp.run(&[1]);
        assert_eq!(again.splay, 0);
        assert_eq!(cmp.totals(), (4, report.splay));
        assert_eq!(cmp.splay().root(), cmp.splay().find(&1));
        assert_eq!(cmp.bst().len(), 7);
    }
}
