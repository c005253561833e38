//! `splay-sequence` — replay an operation file on a BST and a splay tree.
//!
//! Usage:
//!   splay-sequence <FILE>
//!
//! After each line of the file both trees are drawn, BST first.

use clap::Parser;
use splay_tree_cli::config::SequenceConfig;
use splay_tree_cli::render::render;
use splay_tree_cli::sequence::{load_sequence, TreePair};
use splay_tree_cli::{logging, WorkloadError};

fn run(cfg: &SequenceConfig) -> Result<(), WorkloadError> {
    let batches = load_sequence(&cfg.file)?;
    tracing::info!(file = %cfg.file.display(), lines = batches.len(), "sequence loaded");

    let mut trees = TreePair::new();
    for (i, batch) in batches.iter().enumerate() {
        trees.apply_all(batch);
        println!("---Sequence {}---", i + 1);
        println!("{}", render(&trees.bst)?);
        println!("{}", render(&trees.splay)?);
    }
    Ok(())
}

fn main() {
    logging::init();
    let cfg = SequenceConfig::parse();
    if let Err(e) = run(&cfg) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
