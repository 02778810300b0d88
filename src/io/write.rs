// src/io/write.rs
//! Per-round graph snapshots in edge-list form.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MillError, Result};
use crate::graph::DiGraph;

/// Closed set of named output formats. Both emit a `<order> <size>` header
/// followed by one line per directed edge; the unweighted variant drops the
/// weight column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    EdgeList,
    EdgeListUnweighted,
}

impl OutputFormat {
    /// An empty name selects the default (weighted edge list).
    ///
    /// # Errors
    /// `MillError::UnknownFormat` for any unrecognized name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "" | "edgelist" => Ok(Self::EdgeList),
            "edgelist-unweighted" => Ok(Self::EdgeListUnweighted),
            other => Err(MillError::UnknownFormat(other.to_string())),
        }
    }
}

/// Builds the round-`counter` snapshot path: `<dir><prefix>_<counter>`.
/// The directory string is used as a raw prefix; a trailing separator is
/// the caller's responsibility.
#[must_use]
pub fn snapshot_path(output_dir: &str, prefix: &str, counter: u64) -> PathBuf {
    PathBuf::from(format!("{output_dir}{prefix}_{counter}"))
}

/// Creates `path` and writes one snapshot of `graph`. The file handle is
/// closed before this returns.
///
/// # Errors
/// `MillError::Io` if the file cannot be created or written.
pub fn write_snapshot(path: &Path, graph: &DiGraph, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|source| MillError::io(path, source))?;
    let mut out = BufWriter::new(file);
    write_edge_list(&mut out, graph, format == OutputFormat::EdgeList)
        .map_err(|source| MillError::io(path, source))?;
    Ok(())
}

fn write_edge_list(out: &mut impl Write, graph: &DiGraph, weighted: bool) -> std::io::Result<()> {
    writeln!(out, "{} {}", graph.order(), graph.size())?;
    for (u, v, w) in graph.edges() {
        if weighted {
            writeln!(out, "{u} {v} {w}")?;
        } else {
            writeln!(out, "{u} {v}")?;
        }
    }
    out.flush()
}
