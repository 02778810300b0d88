// tests/unit_dist.rs
//! Probability-vector and divergence properties.

use std::collections::BTreeMap;

use edgemill_core::dist::{self, divergence::kl_divergence};
use edgemill_core::error::MillError;
use edgemill_core::graph::DiGraph;

const TOLERANCE: f64 = 1e-12;

#[test]
fn normalize_preserves_length_and_sums_to_one() {
    let weights = [3.0, 1.0, 4.0, 1.0, 5.0];
    let normalized = dist::normalize(&weights).unwrap();
    assert_eq!(normalized.len(), weights.len());
    let sum: f64 = normalized.iter().sum();
    assert!((sum - 1.0).abs() < TOLERANCE, "sum was {sum}");
}

#[test]
fn normalize_rejects_empty_input() {
    assert!(matches!(dist::normalize(&[]), Err(MillError::Normalization)));
}

#[test]
fn normalize_rejects_zero_sum() {
    assert!(matches!(
        dist::normalize(&[0.0, 0.0, 0.0]),
        Err(MillError::Normalization)
    ));
}

#[test]
fn probability_vector_follows_ascending_degree_order() {
    let mut distribution = BTreeMap::new();
    distribution.insert(0, 2);
    distribution.insert(1, 3);
    distribution.insert(2, 5);
    let p = dist::to_probability_vector(&distribution);
    assert_eq!(p, vec![0.2, 0.3, 0.5]);
}

#[test]
fn probability_vector_length_counts_distinct_degrees() {
    let mut g = DiGraph::new();
    g.add_edge(1, 2, 1);
    g.add_edge(3, 2, 1);
    g.add_edge(2, 4, 1);
    g.add_vertex(5);
    // in-degrees: 1:0, 2:2, 3:0, 4:1, 5:0 — three distinct values
    let distribution = dist::in_degree_distribution(&g);
    assert_eq!(distribution.get(&0).copied(), Some(3));
    assert_eq!(distribution.get(&1).copied(), Some(1));
    assert_eq!(distribution.get(&2).copied(), Some(1));

    let p = dist::to_probability_vector(&distribution);
    assert_eq!(p.len(), 3);
    let sum: f64 = p.iter().sum();
    assert!((sum - 1.0).abs() < TOLERANCE);
}

#[test]
fn isolated_vertices_fill_the_zero_bucket() {
    let mut g = DiGraph::new();
    g.add_vertex(1);
    g.add_vertex(2);
    let distribution = dist::in_degree_distribution(&g);
    assert_eq!(distribution.get(&0).copied(), Some(2));
    assert_eq!(dist::to_probability_vector(&distribution), vec![1.0]);
}

#[test]
fn divergence_of_identical_vectors_is_zero() {
    let p = [0.25, 0.25, 0.5];
    assert!(kl_divergence(&p, &p).unwrap().abs() < TOLERANCE);
}

#[test]
fn divergence_is_asymmetric() {
    let p = [1.0, 0.0];
    let q = [0.5, 0.5];
    let d = kl_divergence(&p, &q).unwrap();
    assert!((d - 2.0_f64.ln()).abs() < TOLERANCE, "expected ln(2), got {d}");
    assert!(matches!(
        kl_divergence(&q, &p),
        Err(MillError::DivergenceUndefined { index: 1 })
    ));
}

#[test]
fn divergence_is_undefined_on_missing_reference_mass() {
    // Index 1 is past q's end and counts as zero.
    assert!(matches!(
        kl_divergence(&[0.5, 0.5], &[1.0]),
        Err(MillError::DivergenceUndefined { index: 1 })
    ));
}

#[test]
fn divergence_treats_missing_compared_entries_as_zero() {
    let d = kl_divergence(&[1.0], &[0.5, 0.5]).unwrap();
    assert!((d - 2.0_f64.ln()).abs() < TOLERANCE);
}
