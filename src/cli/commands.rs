//! CLI command implementations.
//!
//! The command layer works with `i64` identifiers and maps the library's
//! `Option` results back onto the classic -1 "no ancestors" convention at the
//! output boundary.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::ancestor::{build_lineage, earliest_ancestor};
use crate::graph::{all_paths, bfs, bft, dfs, dfs_recursive, dft, dft_recursive, Graph};
use crate::types::{GraphError, GraphResult};

/// Parse a relationship pair from its CLI form: `CHILD,PARENT` or a bare
/// `CHILD` for an individual with no listed parent.
pub fn parse_pair(arg: &str) -> GraphResult<(i64, Option<i64>), i64> {
    let mut parts = arg.split(',');
    let child = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(|| GraphError::InvalidPair(arg.to_string()))?;
    let parent = match parts.next() {
        Some(p) => Some(
            p.trim()
                .parse()
                .map_err(|_| GraphError::InvalidPair(arg.to_string()))?,
        ),
        None => None,
    };
    if parts.next().is_some() {
        return Err(GraphError::InvalidPair(arg.to_string()));
    }
    Ok((child, parent))
}

/// Read relationship pairs from a JSON file of the form
/// `[[child, parent], [child], ...]`.
pub fn read_pairs_file(path: &Path) -> GraphResult<Vec<(i64, Option<i64>)>, i64> {
    let text = fs::read_to_string(path)?;
    let raw: Vec<Vec<i64>> = serde_json::from_str(&text)?;

    let mut pairs = Vec::with_capacity(raw.len());
    for entry in raw {
        match entry.as_slice() {
            [child] => pairs.push((*child, None)),
            [child, parent] => pairs.push((*child, Some(*parent))),
            _ => return Err(GraphError::InvalidPair(format!("{:?}", entry))),
        }
    }
    Ok(pairs)
}

fn fmt_path(path: &[i64]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn fmt_search(result: &Option<Vec<i64>>) -> String {
    match result {
        Some(path) => fmt_path(path),
        None => "no path".to_string(),
    }
}

/// Build the seven-vertex sample graph and print each traversal and search
/// over it.
pub fn cmd_demo(json: bool) -> GraphResult<(), i64> {
    let mut graph = Graph::new();
    for v in 1..=7 {
        graph.add_vertex(v);
    }
    for (from, to) in [
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ] {
        graph.add_edge(from, to)?;
    }

    let bft_order = bft(&graph, &1)?;
    let dft_order = dft(&graph, &1)?;
    let dft_rec_order = dft_recursive(&graph, &1)?;
    let bfs_path = bfs(&graph, &1, &6)?;
    let dfs_path = dfs(&graph, &1, &6)?;
    let dfs_rec_path = dfs_recursive(&graph, &1, &6)?;

    if json {
        let report = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "bft": bft_order,
            "dft": dft_order,
            "dft_recursive": dft_rec_order,
            "bfs_1_to_6": bfs_path,
            "dfs_1_to_6": dfs_path,
            "dfs_recursive_1_to_6": dfs_rec_path,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!(
            "Sample graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let mut ids: Vec<i64> = graph.vertices().copied().collect();
        ids.sort_unstable();
        for id in ids {
            let neighbors: Vec<String> =
                graph.neighbors(&id)?.iter().map(|v| v.to_string()).collect();
            println!("  {} -> {{{}}}", id, neighbors.join(", "));
        }
        println!("BFT from 1:           {}", fmt_path(&bft_order));
        println!("DFT from 1:           {}", fmt_path(&dft_order));
        println!("DFT (recursive):      {}", fmt_path(&dft_rec_order));
        println!("BFS 1 -> 6:           {}", fmt_search(&bfs_path));
        println!("DFS 1 -> 6:           {}", fmt_search(&dfs_path));
        println!("DFS (recursive):      {}", fmt_search(&dfs_rec_path));
    }
    Ok(())
}

/// JSON report for the `ancestor` subcommand.
#[derive(Serialize)]
struct AncestorReport {
    start: i64,
    pairs: usize,
    /// The earliest ancestor, or -1 when none is recorded.
    ancestor: i64,
}

/// Run the earliest-ancestor query and print the result, or -1 when the
/// starting individual has no recorded ancestors.
pub fn cmd_ancestor(pairs: &[(i64, Option<i64>)], start: i64, json: bool) -> GraphResult<(), i64> {
    let ancestor = earliest_ancestor(pairs, &start)?.unwrap_or(-1);

    if json {
        let report = AncestorReport {
            start,
            pairs: pairs.len(),
            ancestor,
        };
        println!(
            "{}",
            serde_json::to_string(&report).unwrap_or_default()
        );
    } else {
        println!("{}", ancestor);
    }
    Ok(())
}

/// List every maximal ancestor chain from the starting individual.
pub fn cmd_paths(pairs: &[(i64, Option<i64>)], start: i64, json: bool) -> GraphResult<(), i64> {
    let lineage = build_lineage(pairs)?;
    let chains = if lineage.contains(&start) {
        all_paths(&lineage, &start)?
    } else {
        Vec::new()
    };

    if json {
        println!(
            "{}",
            serde_json::json!({ "start": start, "paths": chains })
        );
    } else if chains.is_empty() {
        println!("No paths from {}", start);
    } else {
        for chain in &chains {
            println!("{}", fmt_path(chain));
        }
    }
    Ok(())
}
