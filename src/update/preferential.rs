// src/update/preferential.rs
//! Preferential-attachment edge updates: destinations drawn proportional
//! to (in-degree + 1), sources uniform.

use rand_chacha::ChaCha20Rng;

use super::{BatchParams, BatchSpec};
use crate::graph::DiGraph;

/// The +1 offset keeps zero-in-degree vertices reachable. An inserted
/// edge's selection weight is its destination's mass at batch start.
#[allow(clippy::cast_precision_loss)]
pub fn generate(graph: &DiGraph, params: &BatchParams, rng: &mut ChaCha20Rng) -> BatchSpec {
    let mut batch = BatchSpec::default();
    super::draw_insertions(graph, params, |in_degree| (in_degree + 1) as f64, &mut batch, rng);
    batch.deletions = super::draw_deletions(graph, params.deletion_quota(graph), rng);
    batch
}
