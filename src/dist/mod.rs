// src/dist/mod.rs
//! Degree-distribution analysis and probability vectors.

pub mod divergence;

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::{MillError, Result};
use crate::graph::{DiGraph, VertexId};

/// Vertex count per observed in-degree, in ascending degree order.
/// Isolated vertices land in the 0 bucket.
#[must_use]
pub fn in_degree_distribution(graph: &DiGraph) -> BTreeMap<usize, usize> {
    degree_histogram(graph, DiGraph::in_degree)
}

/// Vertex count per observed total degree (in + out). Backs the per-round
/// console table.
#[must_use]
pub fn degree_distribution(graph: &DiGraph) -> BTreeMap<usize, usize> {
    degree_histogram(graph, DiGraph::degree)
}

/// The scan parallelizes over vertices; bucket counting commutes, so the
/// result is independent of the split.
fn degree_histogram(
    graph: &DiGraph,
    degree_of: impl Fn(&DiGraph, VertexId) -> usize + Sync,
) -> BTreeMap<usize, usize> {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    vertices
        .par_iter()
        .fold(BTreeMap::new, |mut buckets, &v| {
            *buckets.entry(degree_of(graph, v)).or_insert(0) += 1;
            buckets
        })
        .reduce(BTreeMap::new, |mut merged, buckets| {
            for (degree, count) in buckets {
                *merged.entry(degree).or_insert(0) += count;
            }
            merged
        })
}

/// One probability per distinct degree, in ascending degree order.
/// The length equals the number of distinct degrees observed, not the
/// maximum degree.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_probability_vector(distribution: &BTreeMap<usize, usize>) -> Vec<f64> {
    let total: usize = distribution.values().sum();
    if total == 0 {
        return Vec::new();
    }
    distribution
        .values()
        .map(|&count| count as f64 / total as f64)
        .collect()
}

/// Scales `weights` so they sum to 1.0; length preserved.
///
/// # Errors
/// `MillError::Normalization` when the input is empty or sums to zero —
/// the division is undefined.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>> {
    let sum: f64 = weights.iter().sum();
    if weights.is_empty() || sum == 0.0 {
        return Err(MillError::Normalization);
    }
    Ok(weights.iter().map(|w| w / sum).collect())
}
