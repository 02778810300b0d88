// src/update/mod.rs
//! Batch-update generation and application.
//!
//! An update strategy turns the current graph into one round's
//! [`BatchSpec`]: edges to insert, edges to delete, and the selection
//! weight behind each inserted edge. The weights are what the fidelity
//! check later compares against the realized in-degree distribution.

pub mod custom;
pub mod preferential;
pub mod uniform;

use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::error::{MillError, Result};
use crate::graph::{DiGraph, VertexId, Weight};

/// Weight assigned to every edge a generator inserts.
pub const INSERTED_EDGE_WEIGHT: Weight = 1;

/// Bounded redraws per edge before a generator concludes the graph is
/// saturated under the no-duplicates rule.
const MAX_DRAW_ATTEMPTS: usize = 64;

/// One round's worth of edge updates plus the selection weights behind them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSpec {
    pub insertions: Vec<(VertexId, VertexId, Weight)>,
    pub deletions: Vec<(VertexId, VertexId, Weight)>,
    /// One weight per inserted edge, in generation order. Non-negative,
    /// with a positive sum whenever any insertion occurred.
    pub selection_weights: Vec<f64>,
}

/// Knobs shared by every generator.
#[derive(Debug, Clone)]
pub struct BatchParams {
    pub batch_size: usize,
    /// Fraction of the batch spent on insertions.
    pub edge_insertions: f64,
    /// Fraction of the batch spent on deletions.
    pub edge_deletions: f64,
    pub allow_duplicate_edges: bool,
}

impl BatchParams {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn insertion_quota(&self) -> usize {
        (self.batch_size as f64 * self.edge_insertions) as usize
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn deletion_quota(&self, graph: &DiGraph) -> usize {
        ((self.batch_size as f64 * self.edge_deletions) as usize).min(graph.size())
    }
}

/// Named update strategies. `Planted` and `Match` are declared extension
/// points that fail explicitly when generation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateNature {
    /// Fallback path selected by an empty update-nature string; the
    /// destination weight model comes from the probability-distribution
    /// option.
    Custom(custom::WeightModel),
    Uniform,
    Preferential,
    Planted,
    Match,
}

impl UpdateNature {
    /// Resolves the update-nature / probability-distribution option pair.
    ///
    /// # Errors
    /// `MillError::UnknownUpdateNature` for an unrecognized nature;
    /// `MillError::UnknownDistribution` for an unrecognized distribution
    /// name on the custom path.
    pub fn parse(nature: &str, distribution: &str) -> Result<Self> {
        match nature {
            "" => Ok(Self::Custom(custom::WeightModel::parse(distribution)?)),
            "uniform" => Ok(Self::Uniform),
            "preferential" => Ok(Self::Preferential),
            "planted" => Ok(Self::Planted),
            "match" => Ok(Self::Match),
            other => Err(MillError::UnknownUpdateNature(other.to_string())),
        }
    }

    /// Generates one round's batch against the current graph.
    ///
    /// # Errors
    /// `MillError::UnsupportedUpdateNature` for `planted` and `match`.
    pub fn generate(
        self,
        graph: &DiGraph,
        params: &BatchParams,
        rng: &mut ChaCha20Rng,
    ) -> Result<BatchSpec> {
        match self {
            Self::Custom(model) => Ok(custom::generate(graph, params, model, rng)),
            Self::Uniform => Ok(uniform::generate(graph, params, rng)),
            Self::Preferential => Ok(preferential::generate(graph, params, rng)),
            Self::Planted => Err(MillError::UnsupportedUpdateNature("planted")),
            Self::Match => Err(MillError::UnsupportedUpdateNature("match")),
        }
    }
}

/// Applies deletions, then insertions. Both sets are fully reflected in the
/// graph's edge set when this returns.
pub fn apply_batch(graph: &mut DiGraph, batch: &BatchSpec) {
    for &(u, v, _) in &batch.deletions {
        graph.remove_edge(u, v);
    }
    for &(u, v, w) in &batch.insertions {
        graph.add_edge(u, v, w);
    }
}

/// Shared insertion engine: sources uniform, destinations drawn from the
/// cumulative mass the strategy's weight function assigns per vertex.
/// Vertex masses are frozen at batch start; the pushed selection weight is
/// the chosen destination's mass.
pub(crate) fn draw_insertions(
    graph: &DiGraph,
    params: &BatchParams,
    mass_of: impl Fn(usize) -> f64,
    batch: &mut BatchSpec,
    rng: &mut ChaCha20Rng,
) {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    if vertices.is_empty() {
        return;
    }

    let masses: Vec<f64> = vertices
        .iter()
        .map(|&v| mass_of(graph.in_degree(v)))
        .collect();
    let mut cumulative = Vec::with_capacity(masses.len());
    let mut total = 0.0;
    for &m in &masses {
        total += m;
        cumulative.push(total);
    }
    if total <= 0.0 {
        return;
    }

    let wanted = params.insertion_quota();
    let mut chosen: HashSet<(VertexId, VertexId)> = HashSet::new();
    'edges: for _ in 0..wanted {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let u = vertices[rng.gen_range(0..vertices.len())];
            let slot = rng.gen_range(0.0..total);
            let idx = cumulative.partition_point(|&c| c <= slot).min(vertices.len() - 1);
            let v = vertices[idx];
            if !params.allow_duplicate_edges
                && (graph.has_edge(u, v) || chosen.contains(&(u, v)))
            {
                continue;
            }
            chosen.insert((u, v));
            batch.insertions.push((u, v, INSERTED_EDGE_WEIGHT));
            batch.selection_weights.push(masses[idx]);
            continue 'edges;
        }
        break; // saturated under the no-duplicates rule
    }
}

/// Uniform without-replacement pick from the current edge set, via a
/// partial Fisher-Yates shuffle over an ordered snapshot.
pub(crate) fn draw_deletions(
    graph: &DiGraph,
    count: usize,
    rng: &mut ChaCha20Rng,
) -> Vec<(VertexId, VertexId, Weight)> {
    let mut edges: Vec<_> = graph.edges().collect();
    let count = count.min(edges.len());
    for i in 0..count {
        let j = rng.gen_range(i..edges.len());
        edges.swap(i, j);
    }
    edges.truncate(count);
    edges
}
