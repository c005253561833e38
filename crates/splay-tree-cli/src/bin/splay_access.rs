//! `splay-access` — compare BST and splay-tree access costs.
//!
//! Usage:
//!   splay-access [--size N] [--seed S] <FILE>...
//!
//! Both trees are built from the same shuffled `1..=N`; each access list is
//! then replayed against them in turn.

use clap::Parser;
use splay_tree_cli::access::{load_access_list, CostComparison};
use splay_tree_cli::config::AccessConfig;
use splay_tree_cli::workload::{resolve_seed, shuffled};
use splay_tree_cli::{logging, WorkloadError};

fn run(cfg: &AccessConfig) -> Result<(), WorkloadError> {
    let seed = resolve_seed(cfg.seed);
    tracing::info!(size = cfg.size, seed, "building trees");
    let mut trees = CostComparison::build(&shuffled(cfg.size, seed));

    for (i, path) in cfg.files.iter().enumerate() {
        let list = load_access_list(path)?;
        let report = trees.run(&list);
        println!("---Access List {}---", i + 1);
        println!("Bst: {}", report.bst);
        println!("Splay Tree: {}", report.splay);
    }
    Ok(())
}

fn main() {
    logging::init();
    let cfg = AccessConfig::parse();
    if let Err(e) = run(&cfg) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
