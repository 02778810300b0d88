// src/update/custom.rs
//! Custom edge updates: the probability-distribution option names the
//! destination weight model.

use rand_chacha::ChaCha20Rng;

use super::{BatchParams, BatchSpec};
use crate::error::{MillError, Result};
use crate::graph::DiGraph;

/// Closed set of named destination weight models for the custom path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightModel {
    /// Flat mass; equivalent to the uniform strategy.
    Uniform,
    /// Mass (in-degree + 1); equivalent to the preferential strategy.
    DegreeProportional,
    /// Mass 1/(in-degree + 1); favors low-in-degree destinations.
    InverseDegree,
}

impl WeightModel {
    /// An empty name selects the flat model.
    ///
    /// # Errors
    /// `MillError::UnknownDistribution` for any unrecognized name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "" | "uniform" => Ok(Self::Uniform),
            "degree-proportional" | "preferential" => Ok(Self::DegreeProportional),
            "inverse-degree" => Ok(Self::InverseDegree),
            other => Err(MillError::UnknownDistribution(other.to_string())),
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mass(self, in_degree: usize) -> f64 {
        match self {
            Self::Uniform => 1.0,
            Self::DegreeProportional => (in_degree + 1) as f64,
            Self::InverseDegree => 1.0 / (in_degree + 1) as f64,
        }
    }
}

pub fn generate(
    graph: &DiGraph,
    params: &BatchParams,
    model: WeightModel,
    rng: &mut ChaCha20Rng,
) -> BatchSpec {
    let mut batch = BatchSpec::default();
    super::draw_insertions(graph, params, |in_degree| model.mass(in_degree), &mut batch, rng);
    batch.deletions = super::draw_deletions(graph, params.deletion_quota(graph), rng);
    batch
}
