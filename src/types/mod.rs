//! Shared types for the ancestry library.

pub mod error;

pub use error::{GraphError, GraphResult};

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bounds required of a vertex identifier.
///
/// Equality and hashing drive the adjacency map, the total order drives the
/// earliest-ancestor tie-break, and `Display` drives error messages and CLI
/// output. Small integers and strings both qualify.
pub trait VertexId: Eq + Hash + Ord + Clone + Debug + Display {}

impl<T> VertexId for T where T: Eq + Hash + Ord + Clone + Debug + Display {}
