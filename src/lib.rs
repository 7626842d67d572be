//! Ancestry — in-memory directed graph with the classic traversal/search
//! primitives and an earliest-ancestor query built on top of them.
//!
//! The graph maps each vertex to a set of outgoing neighbors. Six operations
//! cover traversal and search: breadth-first and depth-first traversal
//! (iterative and recursive), breadth-first shortest-path search, and
//! depth-first path search (iterative and recursive). The ancestor layer
//! turns (child, parent) relationship pairs into a lineage graph and finds
//! the ancestor at the greatest distance from a starting individual, ties
//! broken by smallest identifier.

pub mod ancestor;
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used items at the crate root
pub use ancestor::{build_lineage, earliest_ancestor};
pub use graph::{all_paths, bfs, bft, dfs, dfs_recursive, dft, dft_recursive, Graph};
pub use types::{GraphError, GraphResult, VertexId};
