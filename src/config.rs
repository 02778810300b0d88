// src/config.rs
//! Fully resolved run configuration consumed by the orchestrator.
//!
//! Raw CLI strings are validated into typed variants up front (see
//! [`crate::cli::resolve`]), so every config error surfaces before the
//! input graph is even opened.

use std::path::PathBuf;

use crate::graph::transform::Transform;
use crate::io::read::InputFormat;
use crate::io::write::OutputFormat;
use crate::update::UpdateNature;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_graph: PathBuf,
    pub input_format: InputFormat,
    /// Raw prefix for snapshot paths; include a trailing separator to
    /// write into a directory.
    pub output_dir: String,
    pub output_prefix: String,
    pub output_format: OutputFormat,
    /// Fixed batch size; 0 means derive from `batch_size_ratio` on the
    /// first round.
    pub batch_size: usize,
    pub batch_size_ratio: f64,
    pub edge_insertions: f64,
    pub edge_deletions: f64,
    pub allow_duplicate_edges: bool,
    pub update_nature: UpdateNature,
    pub seed: u64,
    /// Number of update rounds.
    pub multi_batch: u64,
    /// Applied once, in order, before the first round.
    pub transforms: Vec<Transform>,
}
