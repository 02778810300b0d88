use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edgemill", version, about = "Streaming graph-update generator with a distribution-fidelity check")]
pub struct Cli {
    /// Path to the input graph file
    #[arg(long, value_name = "FILE")]
    pub input_graph: PathBuf,

    /// Input format: edgelist, matrix-market, or snap-temporal
    #[arg(long, default_value = "matrix-market")]
    pub input_format: String,

    /// Prefix for snapshot paths; end with a separator to target a directory
    #[arg(long, default_value = "")]
    pub output_dir: String,

    /// Filename prefix for per-round snapshots
    #[arg(long, default_value = "graph")]
    pub output_prefix: String,

    /// Output format: edgelist or edgelist-unweighted
    #[arg(long, default_value = "edgelist")]
    pub output_format: String,

    /// Fixed batch size; 0 derives it from --batch-size-ratio
    #[arg(long, default_value_t = 0)]
    pub batch_size: usize,

    /// Batch size as a fraction of the edge count, used while --batch-size is 0
    #[arg(long, default_value_t = 0.0)]
    pub batch_size_ratio: f64,

    /// Fraction of the batch spent on edge insertions
    #[arg(long, default_value_t = 0.0)]
    pub edge_insertions: f64,

    /// Fraction of the batch spent on edge deletions
    #[arg(long, default_value_t = 0.0)]
    pub edge_deletions: f64,

    /// Let batches propose edges that already exist
    #[arg(long)]
    pub allow_duplicate_edges: bool,

    /// Update strategy: uniform, preferential, planted, or match.
    /// Empty selects the custom path keyed by --probability-distribution
    #[arg(long, default_value = "")]
    pub update_nature: String,

    /// Destination weight model for the custom path:
    /// uniform, degree-proportional, or inverse-degree
    #[arg(long, default_value = "")]
    pub probability_distribution: String,

    /// RNG seed; omit for a fresh random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of batch-update rounds
    #[arg(long, default_value_t = 1)]
    pub multi_batch: u64,

    /// Transform to apply before the first round, in the order given (repeatable)
    #[arg(long = "transform", value_name = "NAME")]
    pub transforms: Vec<String>,

    /// Emit the per-round report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
