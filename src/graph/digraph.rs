//! Core graph structure — vertices with directed adjacency sets.

use std::collections::{BTreeSet, HashMap};

use crate::types::{GraphError, GraphResult, VertexId};

/// A directed graph mapping each vertex to its set of outgoing neighbors.
///
/// Neighbor sets are `BTreeSet`s, so enumeration order among a vertex's
/// neighbors is always ascending by identifier. Traversal output is therefore
/// deterministic for a given graph, though callers should still rely only on
/// the documented ordering guarantees (breadth-first by distance, depth-first
/// nesting) rather than literal visitation sequences.
pub struct Graph<V: VertexId> {
    /// Adjacency: vertex -> outgoing neighbor set.
    vertices: HashMap<V, BTreeSet<V>>,
}

impl<V: VertexId> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` has been added as a vertex.
    pub fn contains(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Iterate over all vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Add a vertex to the graph. Idempotent: re-adding an existing vertex
    /// leaves its neighbor set untouched.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.entry(id).or_default();
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already be vertices; referencing an unknown
    /// identifier fails with [`GraphError::VertexNotFound`] rather than
    /// creating the vertex implicitly. Re-adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<(), V> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::VertexNotFound(to));
        }
        match self.vertices.get_mut(&from) {
            Some(neighbors) => {
                neighbors.insert(to);
                Ok(())
            }
            None => Err(GraphError::VertexNotFound(from)),
        }
    }

    /// Get the outgoing neighbor set of `id`.
    ///
    /// An unknown vertex is an error, not an empty set — callers asking about
    /// a vertex they never added have a bug worth surfacing immediately.
    pub fn neighbors(&self, id: &V) -> GraphResult<&BTreeSet<V>, V> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
