// src/cli/mod.rs
//! Command-line surface and its resolution into a typed run config.

pub mod args;

pub use args::Cli;

use crate::config::RunConfig;
use crate::error::Result;
use crate::graph::transform::Transform;
use crate::io::read::InputFormat;
use crate::io::write::OutputFormat;
use crate::update::UpdateNature;

/// Validates the raw CLI strings into a [`RunConfig`].
///
/// # Errors
/// Any unknown format, transform, update-nature, or distribution name.
pub fn resolve(cli: &Cli) -> Result<RunConfig> {
    let transforms = cli
        .transforms
        .iter()
        .filter(|name| !name.is_empty()) // empty transform name is a no-op
        .map(|name| Transform::parse(name))
        .collect::<Result<Vec<_>>>()?;

    Ok(RunConfig {
        input_graph: cli.input_graph.clone(),
        input_format: InputFormat::parse(&cli.input_format)?,
        output_dir: cli.output_dir.clone(),
        output_prefix: cli.output_prefix.clone(),
        output_format: OutputFormat::parse(&cli.output_format)?,
        batch_size: cli.batch_size,
        batch_size_ratio: cli.batch_size_ratio,
        edge_insertions: cli.edge_insertions,
        edge_deletions: cli.edge_deletions,
        allow_duplicate_edges: cli.allow_duplicate_edges,
        update_nature: UpdateNature::parse(&cli.update_nature, &cli.probability_distribution)?,
        seed: cli.seed.unwrap_or_else(rand::random),
        multi_batch: cli.multi_batch,
        transforms,
    })
}
