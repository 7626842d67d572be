//! Earliest-ancestor query over a lineage graph.
//!
//! A lineage graph is built from (child, parent) relationship pairs with one
//! directed edge per pair from descendant to ancestor, so walking edges moves
//! up the family tree. The earliest ancestor of an individual is the vertex
//! at the greatest path distance from it; ties break to the smallest
//! identifier.

use log::debug;

use crate::graph::{all_paths, Graph};
use crate::types::{GraphResult, VertexId};

/// Build a lineage graph from relationship pairs.
///
/// Every identifier appearing in any pair becomes a vertex. A pair with both
/// elements present contributes one directed child → parent edge; a pair with
/// no second element records a known individual with no listed parent.
pub fn build_lineage<V: VertexId>(pairs: &[(V, Option<V>)]) -> GraphResult<Graph<V>, V> {
    let mut lineage = Graph::new();
    for (child, parent) in pairs {
        lineage.add_vertex(child.clone());
        if let Some(parent) = parent {
            lineage.add_vertex(parent.clone());
            lineage.add_edge(child.clone(), parent.clone())?;
        }
    }
    Ok(lineage)
}

/// Find the earliest ancestor of `start` given a set of relationship pairs.
///
/// Enumerates every maximal ancestor chain from `start` and keeps the ones of
/// greatest length (in vertices); the terminus of such a chain is a furthest
/// ancestor. When several chains tie for greatest length, the smallest
/// terminus identifier wins. `Ok(None)` means `start` has no recorded
/// ancestors — either it appears in no pair, or no pair lists a parent for it.
pub fn earliest_ancestor<V: VertexId>(
    pairs: &[(V, Option<V>)],
    start: &V,
) -> GraphResult<Option<V>, V> {
    let lineage = build_lineage(pairs)?;
    if !lineage.contains(start) {
        debug!("{} appears in no relationship pair", start);
        return Ok(None);
    }

    let chains = all_paths(&lineage, start)?;
    let longest = chains.iter().map(Vec::len).max().unwrap_or(0);
    // A chain of one vertex is just `start` itself.
    if longest < 2 {
        return Ok(None);
    }

    let ancestor = chains
        .iter()
        .filter(|chain| chain.len() == longest)
        .filter_map(|chain| chain.last())
        .min()
        .cloned();

    debug!(
        "{} chains from {}, longest {}, earliest ancestor {:?}",
        chains.len(),
        start,
        longest,
        ancestor
    );
    Ok(ancestor)
}
