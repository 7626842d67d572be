//! In-memory directed graph operations — the core data structure.

pub mod digraph;
pub mod traversal;

pub use digraph::Graph;
pub use traversal::{all_paths, bfs, bft, dfs, dfs_recursive, dft, dft_recursive};
