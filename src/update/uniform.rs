// src/update/uniform.rs
//! Uniformly random edge updates: both endpoints drawn uniformly from the
//! vertex set, deletions uniform over the current edge set.

use rand_chacha::ChaCha20Rng;

use super::{BatchParams, BatchSpec};
use crate::graph::DiGraph;

/// Every inserted edge carries selection weight 1.0 — the intended
/// in-degree profile is flat.
pub fn generate(graph: &DiGraph, params: &BatchParams, rng: &mut ChaCha20Rng) -> BatchSpec {
    let mut batch = BatchSpec::default();
    super::draw_insertions(graph, params, |_| 1.0, &mut batch, rng);
    batch.deletions = super::draw_deletions(graph, params.deletion_quota(graph), rng);
    batch
}
