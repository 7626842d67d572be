//! Graph traversal and search algorithms (BFT, DFT, BFS, DFS).

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

/// Breadth-first traversal from `start`.
///
/// Returns every vertex reachable from `start`, each exactly once, in an
/// order where all vertices at distance k appear before any at distance k+1.
/// A vertex is marked visited when dequeued, not when enqueued; neighbors are
/// enqueued unconditionally and deduplicated at dequeue time.
pub fn bft<V: VertexId>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut queue: VecDeque<V> = VecDeque::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();

    queue.push_back(start.clone());
    while let Some(current) = queue.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());
        for next in graph.neighbors(&current)? {
            queue.push_back(next.clone());
        }
        order.push(current);
    }

    debug!("bft from {} visited {} vertices", start, order.len());
    Ok(order)
}

/// Depth-first traversal from `start`, iterative.
///
/// Same visited-on-pop discipline as [`bft`] but with a LIFO frontier: one
/// branch is fully explored before backtracking to the next.
pub fn dft<V: VertexId>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut stack: Vec<V> = Vec::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();

    stack.push(start.clone());
    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());
        for next in graph.neighbors(&current)? {
            stack.push(next.clone());
        }
        order.push(current);
    }

    debug!("dft from {} visited {} vertices", start, order.len());
    Ok(order)
}

/// Depth-first traversal from `start`, recursive.
///
/// Pre-order over the (sorted) neighbor enumeration; visits the same vertex
/// set as [`dft`]. Call-stack depth is bounded by the longest simple path.
pub fn dft_recursive<V: VertexId>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    dft_visit(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn dft_visit<V: VertexId>(
    graph: &Graph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) -> GraphResult<(), V> {
    visited.insert(vertex.clone());
    order.push(vertex.clone());
    for next in graph.neighbors(vertex)? {
        if !visited.contains(next) {
            dft_visit(graph, next, visited, order)?;
        }
    }
    Ok(())
}

/// Breadth-first search: shortest path (fewest edges) from `start` to `goal`.
///
/// The frontier holds whole path-prefixes rather than bare vertices; the
/// first dequeued path whose terminus is `goal` is shortest under unweighted
/// edges. `Ok(None)` means `goal` is unreachable — a normal result, not an
/// error. A search for `start` itself returns the single-vertex path.
pub fn bfs<V: VertexId>(graph: &Graph<V>, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut queue: VecDeque<Vec<V>> = VecDeque::new();
    let mut visited: HashSet<V> = HashSet::new();

    queue.push_back(vec![start.clone()]);
    while let Some(path) = queue.pop_front() {
        let Some(current) = path.last().cloned() else {
            continue;
        };
        if visited.contains(&current) {
            continue;
        }
        if current == *goal {
            debug!("bfs {} -> {} found path of {} vertices", start, goal, path.len());
            return Ok(Some(path));
        }
        visited.insert(current.clone());
        for next in graph.neighbors(&current)? {
            let mut extended = path.clone();
            extended.push(next.clone());
            queue.push_back(extended);
        }
    }

    debug!("bfs {} -> {}: no path", start, goal);
    Ok(None)
}

/// Depth-first search: some path from `start` to `goal`, not necessarily
/// shortest. Same path-prefix technique as [`bfs`] with a LIFO frontier.
pub fn dfs<V: VertexId>(graph: &Graph<V>, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut stack: Vec<Vec<V>> = Vec::new();
    let mut visited: HashSet<V> = HashSet::new();

    stack.push(vec![start.clone()]);
    while let Some(path) = stack.pop() {
        let Some(current) = path.last().cloned() else {
            continue;
        };
        if visited.contains(&current) {
            continue;
        }
        if current == *goal {
            return Ok(Some(path));
        }
        visited.insert(current.clone());
        for next in graph.neighbors(&current)? {
            let mut extended = path.clone();
            extended.push(next.clone());
            stack.push(extended);
        }
    }

    Ok(None)
}

/// Recursive depth-first search for a path from `start` to `goal`.
///
/// Returns the first successful sub-path. One visited set is shared by
/// reference across all recursive branches: a vertex explored in one branch
/// is never re-explored by a sibling, which guarantees termination on graphs
/// with shared descendants.
pub fn dfs_recursive<V: VertexId>(
    graph: &Graph<V>,
    start: &V,
    goal: &V,
) -> GraphResult<Option<Vec<V>>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut path: Vec<V> = Vec::new();
    dfs_visit(graph, start, goal, &mut visited, &mut path)
}

fn dfs_visit<V: VertexId>(
    graph: &Graph<V>,
    vertex: &V,
    goal: &V,
    visited: &mut HashSet<V>,
    path: &mut Vec<V>,
) -> GraphResult<Option<Vec<V>>, V> {
    visited.insert(vertex.clone());
    path.push(vertex.clone());

    if vertex == goal {
        return Ok(Some(path.clone()));
    }

    for next in graph.neighbors(vertex)? {
        if !visited.contains(next) {
            if let Some(found) = dfs_visit(graph, next, goal, visited, path)? {
                return Ok(Some(found));
            }
        }
    }

    // Dead end: unwind this vertex from the path. It stays visited.
    path.pop();
    Ok(None)
}

/// Enumerate every maximal simple path starting at `start`.
///
/// Unlike the single-visit traversals, a vertex may appear in many returned
/// paths: only the current path blocks revisiting, and backtracking unblocks
/// a vertex for sibling branches. A path is recorded when it cannot be
/// extended — every outgoing neighbor of its terminus already lies on it.
/// A vertex with no outgoing edges yields the single path `[start]`.
///
/// This is the enumeration the earliest-ancestor query reduces over, where
/// diamond-shaped ancestries reach the same vertex along paths of different
/// lengths and each length must be seen.
pub fn all_paths<V: VertexId>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<Vec<V>>, V> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut on_path: HashSet<V> = HashSet::new();
    let mut path: Vec<V> = Vec::new();
    let mut found: Vec<Vec<V>> = Vec::new();
    extend_path(graph, start, &mut on_path, &mut path, &mut found)?;

    debug!("all_paths from {}: {} maximal paths", start, found.len());
    Ok(found)
}

fn extend_path<V: VertexId>(
    graph: &Graph<V>,
    vertex: &V,
    on_path: &mut HashSet<V>,
    path: &mut Vec<V>,
    found: &mut Vec<Vec<V>>,
) -> GraphResult<(), V> {
    on_path.insert(vertex.clone());
    path.push(vertex.clone());

    let mut extended = false;
    for next in graph.neighbors(vertex)? {
        if !on_path.contains(next) {
            extended = true;
            extend_path(graph, next, on_path, path, found)?;
        }
    }
    if !extended {
        found.push(path.clone());
    }

    on_path.remove(vertex);
    path.pop();
    Ok(())
}
