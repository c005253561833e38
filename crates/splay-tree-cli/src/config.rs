use std::path::PathBuf;

use clap::Parser;

/// Apply an operation-sequence file to a BST and a splay tree, drawing both
/// trees after every line.
#[derive(Parser, Clone, Debug)]
#[command(name = "splay-sequence", version)]
pub struct SequenceConfig {
    /// File of `<int>+` / `<int>-` tokens, one batch per line.
    #[arg(env = "SPLAY_SEQUENCE_FILE")]
    pub file: PathBuf,
}

/// Build a BST and a splay tree from a shuffled `1..=size` and compare the
/// cost of replaying access lists against them.
#[derive(Parser, Clone, Debug)]
#[command(name = "splay-access", version)]
pub struct AccessConfig {
    /// Number of elements inserted before the lists are replayed.
    #[arg(long, env = "SPLAY_ACCESS_SIZE", default_value_t = 10_000)]
    pub size: u32,

    /// Shuffle seed; random (and logged at `warn`) when omitted.
    #[arg(long, env = "SPLAY_ACCESS_SEED")]
    pub seed: Option<u64>,

    /// Access-list files, replayed in order against the same trees.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
