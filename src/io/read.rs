// src/io/read.rs
//! Input parsing: format dispatch plus the matrix-market and edge-list
//! readers. `snap-temporal` is a declared format with no reader yet.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MillError, Result};
use crate::graph::{DiGraph, VertexId, Weight};

/// Closed set of named input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    EdgeList,
    MatrixMarket,
    SnapTemporal,
}

impl InputFormat {
    /// # Errors
    /// `MillError::UnknownFormat` for any unrecognized name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "edgelist" => Ok(Self::EdgeList),
            "matrix-market" => Ok(Self::MatrixMarket),
            "snap-temporal" => Ok(Self::SnapTemporal),
            other => Err(MillError::UnknownFormat(other.to_string())),
        }
    }
}

/// Reads a graph from `path` in the given format.
///
/// # Errors
/// `MillError::Io` if the file cannot be opened, `MillError::Parse` on
/// malformed content, `MillError::UnsupportedFormat` for `snap-temporal`.
pub fn read_graph(path: &Path, format: InputFormat) -> Result<DiGraph> {
    let file = File::open(path).map_err(|source| MillError::io(path, source))?;
    let reader = BufReader::new(file);
    match format {
        InputFormat::MatrixMarket => read_matrix_market(reader, path),
        InputFormat::EdgeList => read_edge_list(reader, path),
        InputFormat::SnapTemporal => Err(MillError::UnsupportedFormat("snap-temporal")),
    }
}

fn parse_err(path: &Path, line: usize, reason: impl Into<String>) -> MillError {
    MillError::Parse {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, path: &Path, line: usize) -> Result<T> {
    field
        .parse()
        .map_err(|_| parse_err(path, line, format!("invalid number '{field}'")))
}

/// Matrix-market coordinate reader. Handles `pattern` (edges default to
/// weight 1) and `symmetric` (both directions stored) headers; every vertex
/// in `1..=max(rows, cols)` exists afterwards, so isolated vertices keep
/// their degree-0 bucket.
fn read_matrix_market<R: BufRead>(reader: R, path: &Path) -> Result<DiGraph> {
    let mut graph = DiGraph::new();
    let mut symmetric = false;
    let mut pattern = false;
    let mut header_seen = false;
    let mut dims_seen = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MillError::io(path, source))?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.starts_with("%%MatrixMarket") {
            symmetric = trimmed.contains("symmetric");
            pattern = trimmed.contains("pattern");
            header_seen = true;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if !dims_seen {
            if fields.len() < 3 {
                return Err(parse_err(path, line_no, "expected rows, columns and entry count"));
            }
            let rows: VertexId = parse_number(fields[0], path, line_no)?;
            let cols: VertexId = parse_number(fields[1], path, line_no)?;
            for v in 1..=rows.max(cols) {
                graph.add_vertex(v);
            }
            dims_seen = true;
            continue;
        }
        if fields.len() < 2 {
            return Err(parse_err(path, line_no, "expected source and destination"));
        }
        let u: VertexId = parse_number(fields[0], path, line_no)?;
        let v: VertexId = parse_number(fields[1], path, line_no)?;
        let w = if pattern || fields.len() < 3 {
            1
        } else {
            parse_weight(fields[2], path, line_no)?
        };
        graph.add_edge(u, v, w);
        if symmetric && u != v {
            graph.add_edge(v, u, w);
        }
    }

    if !header_seen {
        return Err(parse_err(path, 1, "missing %%MatrixMarket header"));
    }
    if !dims_seen {
        return Err(parse_err(path, 1, "missing size line"));
    }
    Ok(graph)
}

/// Edge-list reader: the format this tool writes. First non-comment line is
/// `<vertex count> <edge count>`, then `<src> <dst> [weight]` per edge.
/// Vertex ids are 1-based; the header count pre-creates `1..=count` so
/// isolated vertices survive a write/read round trip.
fn read_edge_list<R: BufRead>(reader: R, path: &Path) -> Result<DiGraph> {
    let mut graph = DiGraph::new();
    let mut header_seen = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MillError::io(path, source))?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if !header_seen {
            if fields.len() != 2 {
                return Err(parse_err(path, line_no, "expected vertex and edge counts"));
            }
            let order: VertexId = parse_number(fields[0], path, line_no)?;
            for v in 1..=order {
                graph.add_vertex(v);
            }
            header_seen = true;
            continue;
        }
        if fields.len() < 2 || fields.len() > 3 {
            return Err(parse_err(path, line_no, "expected source, destination and optional weight"));
        }
        let u: VertexId = parse_number(fields[0], path, line_no)?;
        let v: VertexId = parse_number(fields[1], path, line_no)?;
        let w: Weight = if fields.len() == 3 {
            parse_weight(fields[2], path, line_no)?
        } else {
            1
        };
        graph.add_edge(u, v, w);
    }

    if !header_seen {
        return Err(parse_err(path, 1, "missing header line"));
    }
    Ok(graph)
}

/// Weights parse as integers first, then as reals truncated toward zero
/// (matrix-market `real` fields).
#[allow(clippy::cast_possible_truncation)]
fn parse_weight(field: &str, path: &Path, line: usize) -> Result<Weight> {
    if let Ok(w) = field.parse::<Weight>() {
        return Ok(w);
    }
    field
        .parse::<f64>()
        .map(|w| w as Weight)
        .map_err(|_| parse_err(path, line, format!("invalid edge weight '{field}'")))
}
