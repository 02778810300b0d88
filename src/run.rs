// src/run.rs
//! Round-based orchestration: read, transform, then repeated batch updates.
//!
//! All mutable run state lives in one [`RunState`] value threaded through
//! every step — never in globals — so a test harness can drive several
//! simulated runs side by side.

use std::collections::BTreeMap;
use std::time::Instant;

use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::config::RunConfig;
use crate::dist::{self, divergence};
use crate::error::{MillError, Result};
use crate::graph::DiGraph;
use crate::io::{read, write};
use crate::update::{self, BatchParams};

/// Mutable state owned by the orchestrator for the run's lifetime.
pub struct RunState {
    pub graph: DiGraph,
    /// Seeded once at run start and advanced by every round's draws; the
    /// run is a total order over this stream.
    pub rng: ChaCha20Rng,
    /// Snapshot counter, pre-incremented before each write: the first
    /// file is `<prefix>_1`. Never reused or reset within a run.
    pub counter: u64,
    /// Effective batch size. Stays 0 until the first round derives it
    /// from the ratio, then holds that absolute value for every later
    /// round even as the graph grows.
    pub batch_size: usize,
    pub started: Instant,
}

/// Per-round record surfaced in the summary and the `--json` report.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub round: u64,
    pub batch_size: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub output_file: String,
    /// Absent when scoring was skipped or recovered from.
    pub divergence: Option<f64>,
    /// Why scoring produced no value, when it didn't.
    pub fidelity_note: Option<String>,
}

/// Everything a caller needs to inspect a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub rounds: Vec<RoundReport>,
}

/// Drives a whole run: `ReadGraph → ApplyTransforms → round loop`.
///
/// # Errors
/// Any I/O, parse, config, or generator error. Fidelity scoring is the one
/// non-fatal step; see [`RoundReport::fidelity_note`].
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let started = Instant::now();
    let graph = read::read_graph(&config.input_graph, config.input_format)?;
    println!("Read graph: {:.3} seconds", started.elapsed().as_secs_f64());

    let mut state = RunState {
        graph,
        rng: ChaCha20Rng::seed_from_u64(config.seed),
        counter: 0,
        batch_size: config.batch_size,
        started,
    };

    for transform in &config.transforms {
        state.graph = transform.apply(&state.graph)?;
        println!(
            "Perform transform {}: {:.3} seconds",
            transform.name(),
            state.started.elapsed().as_secs_f64()
        );
    }

    let mut rounds = Vec::with_capacity(config.multi_batch as usize);
    for round in 1..=config.multi_batch {
        rounds.push(run_round(&mut state, config, round)?);
    }
    Ok(RunSummary {
        seed: config.seed,
        rounds,
    })
}

/// One round: `ComputeBatchSize → GenerateBatch → ApplyBatch →
/// AnalyzeDistributions → ScoreFidelity → WriteOutput`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn run_round(state: &mut RunState, config: &RunConfig, round: u64) -> Result<RoundReport> {
    // Sticky batch size: derived against the first round's edge count,
    // then reused verbatim — not recomputed as the graph grows.
    if state.batch_size == 0 {
        state.batch_size = (state.graph.size() as f64 * config.batch_size_ratio) as usize;
    }
    let params = BatchParams {
        batch_size: state.batch_size,
        edge_insertions: config.edge_insertions,
        edge_deletions: config.edge_deletions,
        allow_duplicate_edges: config.allow_duplicate_edges,
    };

    let batch = config.update_nature.generate(&state.graph, &params, &mut state.rng)?;
    update::apply_batch(&mut state.graph, &batch);

    let empirical = dist::to_probability_vector(&dist::in_degree_distribution(&state.graph));
    let (divergence, fidelity_note) = score_fidelity(&empirical, &batch.selection_weights)?;

    print_degree_table(&dist::degree_distribution(&state.graph));
    println!(
        "Perform batch update {}: {:.3} seconds",
        round,
        state.started.elapsed().as_secs_f64()
    );

    state.counter += 1;
    let path = write::snapshot_path(&config.output_dir, &config.output_prefix, state.counter);
    write::write_snapshot(&path, &state.graph, config.output_format)?;
    println!(
        "Write batch update {}: {:.3} seconds",
        state.counter,
        state.started.elapsed().as_secs_f64()
    );

    match (divergence, &fidelity_note) {
        (Some(d), _) => println!("KL Divergence: {d}"),
        (None, Some(note)) => eprintln!("{} {note}", "Error:".red()),
        (None, None) => {}
    }

    Ok(RoundReport {
        round,
        batch_size: state.batch_size,
        insertions: batch.insertions.len(),
        deletions: batch.deletions.len(),
        output_file: path.display().to_string(),
        divergence,
        fidelity_note,
    })
}

/// Compares the realized in-degree profile against the profile implied by
/// the generator's selection weights.
///
/// A round with no insertions has nothing to score — that case is guarded
/// here rather than surfacing as a normalization failure. An undefined
/// divergence is recovered locally: the round still writes its snapshot
/// and the run proceeds. A nonempty zero-sum weight vector breaks the
/// generator contract and stays fatal.
fn score_fidelity(
    empirical: &[f64],
    selection_weights: &[f64],
) -> Result<(Option<f64>, Option<String>)> {
    if selection_weights.is_empty() {
        return Ok((
            None,
            Some("fidelity skipped: batch inserted no edges".to_string()),
        ));
    }
    let intended = dist::normalize(selection_weights)?;
    match divergence::kl_divergence(empirical, &intended) {
        Ok(d) => Ok((Some(d), None)),
        Err(err @ MillError::DivergenceUndefined { .. }) => Ok((None, Some(err.to_string()))),
        Err(err) => Err(err),
    }
}

fn print_degree_table(distribution: &BTreeMap<usize, usize>) {
    println!("Degree Distribution:");
    for (degree, count) in distribution {
        println!("Degree {degree}: {count} vertices");
    }
}
