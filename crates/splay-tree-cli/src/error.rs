use std::path::PathBuf;

use splay_tree::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: token `{token}` must be an integer followed by `+` or `-`")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: `{token}` is not an integer")]
    InvalidElement { line: usize, token: String },
    #[error(transparent)]
    Tree(#[from] TreeError),
}
