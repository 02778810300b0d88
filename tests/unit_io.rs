// tests/unit_io.rs
//! Reader and writer behavior: format dispatch, matrix-market edge cases,
//! and snapshot round trips.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use edgemill_core::error::MillError;
use edgemill_core::graph::DiGraph;
use edgemill_core::io::read::{self, InputFormat};
use edgemill_core::io::write::{self, OutputFormat};

fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn matrix_market_general_weighted() -> Result<()> {
    let dir = TempDir::new()?;
    let path = fixture(
        &dir,
        "g.mtx",
        "%%MatrixMarket matrix coordinate integer general\n\
         % a comment\n\
         4 4 3\n\
         1 2 5\n\
         2 3 1\n\
         3 1 2\n",
    );
    let g = read::read_graph(&path, InputFormat::MatrixMarket)?;
    assert_eq!(g.order(), 4, "vertex 4 is isolated but present");
    assert_eq!(g.size(), 3);
    assert_eq!(g.edge_weight(1, 2), Some(5));
    assert_eq!(g.in_degree(4), 0);
    Ok(())
}

#[test]
fn matrix_market_pattern_symmetric() -> Result<()> {
    let dir = TempDir::new()?;
    let path = fixture(
        &dir,
        "g.mtx",
        "%%MatrixMarket matrix coordinate pattern symmetric\n\
         3 3 2\n\
         2 1\n\
         3 2\n",
    );
    let g = read::read_graph(&path, InputFormat::MatrixMarket)?;
    assert_eq!(g.size(), 4, "symmetric entries store both directions");
    assert_eq!(g.edge_weight(1, 2), Some(1), "pattern entries default to weight 1");
    assert_eq!(g.edge_weight(2, 3), Some(1));
    Ok(())
}

#[test]
fn matrix_market_requires_a_header() -> Result<()> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "g.mtx", "3 3 1\n1 2 1\n");
    assert!(matches!(
        read::read_graph(&path, InputFormat::MatrixMarket),
        Err(MillError::Parse { .. })
    ));
    Ok(())
}

#[test]
fn matrix_market_rejects_bad_numbers() -> Result<()> {
    let dir = TempDir::new()?;
    let path = fixture(
        &dir,
        "g.mtx",
        "%%MatrixMarket matrix coordinate integer general\n2 2 1\n1 x 1\n",
    );
    assert!(matches!(
        read::read_graph(&path, InputFormat::MatrixMarket),
        Err(MillError::Parse { line, .. }) if line == 3
    ));
    Ok(())
}

#[test]
fn missing_input_file_is_an_io_error() {
    let err = read::read_graph(
        std::path::Path::new("/nonexistent/graph.mtx"),
        InputFormat::MatrixMarket,
    )
    .unwrap_err();
    assert!(matches!(err, MillError::Io { .. }));
}

#[test]
fn snap_temporal_is_a_declared_but_unsupported_format() -> Result<()> {
    let dir = TempDir::new()?;
    let path = fixture(&dir, "g.txt", "");
    assert!(matches!(
        read::read_graph(&path, InputFormat::SnapTemporal),
        Err(MillError::UnsupportedFormat("snap-temporal"))
    ));
    Ok(())
}

#[test]
fn unknown_format_names_are_rejected() {
    assert!(matches!(
        InputFormat::parse("csv"),
        Err(MillError::UnknownFormat(name)) if name == "csv"
    ));
    assert!(matches!(
        OutputFormat::parse("gml"),
        Err(MillError::UnknownFormat(name)) if name == "gml"
    ));
    assert_eq!(OutputFormat::parse("").unwrap(), OutputFormat::EdgeList);
}

#[test]
fn snapshot_path_concatenates_dir_prefix_and_counter() {
    assert_eq!(
        write::snapshot_path("out/", "graph", 3),
        PathBuf::from("out/graph_3")
    );
    assert_eq!(write::snapshot_path("", "g", 1), PathBuf::from("g_1"));
}

#[test]
fn snapshot_round_trips_through_the_edgelist_reader() -> Result<()> {
    let dir = TempDir::new()?;
    let mut g = DiGraph::new();
    g.add_edge(1, 2, 7);
    g.add_edge(3, 2, 1);
    g.add_vertex(4); // isolated; must survive the round trip

    let path = dir.path().join("snap_1");
    write::write_snapshot(&path, &g, OutputFormat::EdgeList)?;
    let back = read::read_graph(&path, InputFormat::EdgeList)?;
    assert_eq!(back, g);
    Ok(())
}

#[test]
fn unweighted_snapshots_omit_the_weight_column() -> Result<()> {
    let dir = TempDir::new()?;
    let mut g = DiGraph::new();
    g.add_edge(1, 2, 7);
    g.add_edge(2, 1, 9);

    let path = dir.path().join("snap_1");
    write::write_snapshot(&path, &g, OutputFormat::EdgeListUnweighted)?;
    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "2 2");
    assert!(lines[1..].iter().all(|l| l.split_whitespace().count() == 2));
    Ok(())
}

#[test]
fn header_line_matches_order_and_size() -> Result<()> {
    let dir = TempDir::new()?;
    let mut g = DiGraph::new();
    g.add_edge(1, 2, 1);
    g.add_edge(2, 3, 1);
    g.add_vertex(5);

    let path = dir.path().join("snap_1");
    write::write_snapshot(&path, &g, OutputFormat::EdgeList)?;
    let content = fs::read_to_string(&path)?;
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("4 2"));
    assert_eq!(lines.count(), 2, "one line per directed edge");
    Ok(())
}
