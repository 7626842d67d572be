//! Earliest-ancestor query tests, plus the CLI pair-parsing layer.

use std::io::Write;

use ancestry::ancestor::{build_lineage, earliest_ancestor};
use ancestry::cli::commands::{parse_pair, read_pairs_file};
use ancestry::types::GraphError;

use tempfile::NamedTempFile;

fn pairs(edges: &[(i64, i64)]) -> Vec<(i64, Option<i64>)> {
    edges.iter().map(|&(c, p)| (c, Some(p))).collect()
}

// ==================== Lineage Construction Tests ====================

#[test]
fn test_build_lineage_shape() {
    let lineage = build_lineage(&pairs(&[(1, 2), (2, 3), (3, 4), (4, 5)])).unwrap();
    assert_eq!(lineage.vertex_count(), 5);
    assert_eq!(lineage.edge_count(), 4);
    // Edges point child -> parent
    assert!(lineage.neighbors(&1).unwrap().contains(&2));
    assert!(!lineage.neighbors(&2).unwrap().contains(&1));
}

#[test]
fn test_build_lineage_parentless_pair() {
    let lineage = build_lineage(&[(7, None)]).unwrap();
    assert_eq!(lineage.vertex_count(), 1);
    assert_eq!(lineage.edge_count(), 0);
    assert!(lineage.contains(&7));
}

// ==================== Earliest Ancestor Tests ====================

#[test]
fn test_single_chain() {
    let ancestors = pairs(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(earliest_ancestor(&ancestors, &1).unwrap(), Some(5));
    assert_eq!(earliest_ancestor(&ancestors, &3).unwrap(), Some(5));
    // The top of the chain has no ancestors
    assert_eq!(earliest_ancestor(&ancestors, &5).unwrap(), None);
}

#[test]
fn test_direct_parent_only() {
    let ancestors = pairs(&[(1, 2)]);
    assert_eq!(earliest_ancestor(&ancestors, &1).unwrap(), Some(2));
}

#[test]
fn test_tie_breaks_to_smallest_identifier() {
    // Two disjoint chains of three vertices each, ending at 7 and at 3
    let ancestors = pairs(&[(1, 2), (2, 7), (1, 4), (4, 3)]);
    assert_eq!(earliest_ancestor(&ancestors, &1).unwrap(), Some(3));
}

#[test]
fn test_no_ancestors() {
    // Start appears in no pair at all
    let ancestors = pairs(&[(1, 2)]);
    assert_eq!(earliest_ancestor(&ancestors, &9).unwrap(), None);
    // No pairs whatsoever
    assert_eq!(earliest_ancestor(&[], &1).unwrap(), None);
    // Known individual, but no listed parent
    assert_eq!(earliest_ancestor(&[(1, None)], &1).unwrap(), None);
}

#[test]
fn test_diamond_ancestry() {
    // Both branches converge on 4 and continue to 5
    let ancestors = pairs(&[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
    assert_eq!(earliest_ancestor(&ancestors, &1).unwrap(), Some(5));
}

#[test]
fn test_same_ancestor_at_two_distances() {
    // 4 is a parent of 1 and a grandparent of 1 through 2; the longer
    // chain wins the distance comparison
    let ancestors = pairs(&[(1, 2), (2, 4), (1, 4)]);
    assert_eq!(earliest_ancestor(&ancestors, &1).unwrap(), Some(4));
}

#[test]
fn test_deeper_chain_beats_wider_tie() {
    // One branch of length 2, one of length 4: no tie to break
    let ancestors = pairs(&[(1, 9), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(earliest_ancestor(&ancestors, &1).unwrap(), Some(4));
}

#[test]
fn test_string_identifiers() {
    let ancestors: Vec<(&str, Option<&str>)> = vec![
        ("dana", Some("erin")),
        ("erin", Some("zoe")),
        ("dana", Some("carl")),
        ("carl", Some("ann")),
    ];
    // Both chains have three vertices; "ann" < "zoe"
    assert_eq!(earliest_ancestor(&ancestors, &"dana").unwrap(), Some("ann"));
}

// ==================== CLI Pair Layer Tests ====================

#[test]
fn test_parse_pair() {
    assert_eq!(parse_pair("3,5").unwrap(), (3, Some(5)));
    assert_eq!(parse_pair(" 3 , 5 ").unwrap(), (3, Some(5)));
    assert_eq!(parse_pair("3").unwrap(), (3, None));

    for bad in ["", "a,b", "3,b", "1,2,3"] {
        match parse_pair(bad) {
            Err(GraphError::InvalidPair(_)) => {}
            other => panic!("Expected InvalidPair for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_read_pairs_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[[1, 2], [2, 3], [4]]").unwrap();

    let pairs = read_pairs_file(file.path()).unwrap();
    assert_eq!(pairs, vec![(1, Some(2)), (2, Some(3)), (4, None)]);
    assert_eq!(earliest_ancestor(&pairs, &1).unwrap(), Some(3));
}

#[test]
fn test_read_pairs_file_rejects_bad_input() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    match read_pairs_file(file.path()) {
        Err(GraphError::Json(_)) => {}
        other => panic!("Expected Json error, got {:?}", other),
    }

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[[1, 2, 3]]").unwrap();
    match read_pairs_file(file.path()) {
        Err(GraphError::InvalidPair(_)) => {}
        other => panic!("Expected InvalidPair, got {:?}", other),
    }

    match read_pairs_file(std::path::Path::new("/nonexistent/pairs.json")) {
        Err(GraphError::Io(_)) => {}
        other => panic!("Expected Io error, got {:?}", other),
    }
}
