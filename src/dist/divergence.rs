// src/dist/divergence.rs
//! Kullback-Leibler divergence between probability vectors.

use crate::error::{MillError, Result};

/// KL divergence of `p` from the reference `q`, strictly by position.
///
/// The harness feeds this a degree-rank-ordered vector for `p` and a
/// generation-ordered vector for `q`; no alignment of the two index
/// semantics is attempted. Entries past either vector's end count as 0.0.
///
/// # Errors
/// `MillError::DivergenceUndefined` when some `p[i] > 0` has `q[i] == 0` —
/// the measure is mathematically undefined there.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    let n = p.len().max(q.len());
    let mut divergence = 0.0;
    for i in 0..n {
        let p_i = p.get(i).copied().unwrap_or(0.0);
        let q_i = q.get(i).copied().unwrap_or(0.0);
        if p_i == 0.0 {
            continue;
        }
        if q_i == 0.0 {
            return Err(MillError::DivergenceUndefined { index: i });
        }
        divergence += p_i * (p_i / q_i).ln();
    }
    Ok(divergence)
}
