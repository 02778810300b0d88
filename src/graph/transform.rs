// src/graph/transform.rs
//! Structural transforms applied to the graph once, before any update round.

use super::DiGraph;
use crate::error::{MillError, Result};

/// Closed set of named transforms. `Transpose` and `Symmetrize` are
/// implemented; the rest are declared extension points that fail explicitly
/// when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Transpose,
    Symmetrize,
    Unsymmetrize,
    LoopDeadends,
    LoopVertices,
    ClearWeights,
    SetWeights,
}

impl Transform {
    /// Parses a transform name. The caller filters out empty names, which
    /// are no-ops.
    ///
    /// # Errors
    /// `MillError::UnknownTransform` for any unrecognized name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "transpose" => Ok(Self::Transpose),
            "symmetrize" => Ok(Self::Symmetrize),
            "unsymmetrize" => Ok(Self::Unsymmetrize),
            "loop-deadends" => Ok(Self::LoopDeadends),
            "loop-vertices" => Ok(Self::LoopVertices),
            "clear-weights" => Ok(Self::ClearWeights),
            "set-weights" => Ok(Self::SetWeights),
            other => Err(MillError::UnknownTransform(other.to_string())),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Transpose => "transpose",
            Self::Symmetrize => "symmetrize",
            Self::Unsymmetrize => "unsymmetrize",
            Self::LoopDeadends => "loop-deadends",
            Self::LoopVertices => "loop-vertices",
            Self::ClearWeights => "clear-weights",
            Self::SetWeights => "set-weights",
        }
    }

    /// Produces the transformed graph; the caller replaces its graph with
    /// the result.
    ///
    /// # Errors
    /// `MillError::UnsupportedTransform` for declared-but-unimplemented
    /// variants.
    pub fn apply(self, graph: &DiGraph) -> Result<DiGraph> {
        match self {
            Self::Transpose => Ok(transpose(graph)),
            Self::Symmetrize => Ok(symmetrize(graph)),
            Self::Unsymmetrize
            | Self::LoopDeadends
            | Self::LoopVertices
            | Self::ClearWeights
            | Self::SetWeights => Err(MillError::UnsupportedTransform(self.name())),
        }
    }
}

/// Parses and applies an ordered list of transform names. All names are
/// validated before the first one runs, so an unknown name never leaves the
/// graph half-transformed.
///
/// # Errors
/// Any parse or apply failure from [`Transform`].
pub fn apply_transforms(graph: DiGraph, names: &[String]) -> Result<DiGraph> {
    let transforms = names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| Transform::parse(name))
        .collect::<Result<Vec<_>>>()?;
    let mut graph = graph;
    for transform in transforms {
        graph = transform.apply(&graph)?;
    }
    Ok(graph)
}

/// Reverses every edge, keeping weights.
#[must_use]
pub fn transpose(graph: &DiGraph) -> DiGraph {
    let mut result = DiGraph::new();
    for u in graph.vertices() {
        result.add_vertex(u);
    }
    for (u, v, w) in graph.edges() {
        result.add_edge(v, u, w);
    }
    result
}

/// Adds the reverse of every edge. Where the reverse already exists its
/// weight is kept.
#[must_use]
pub fn symmetrize(graph: &DiGraph) -> DiGraph {
    let mut result = graph.clone();
    for (u, v, w) in graph.edges() {
        if !result.has_edge(v, u) {
            result.add_edge(v, u, w);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiGraph {
        let mut g = DiGraph::new();
        g.add_edge(1, 2, 10);
        g.add_edge(2, 3, 20);
        g.add_edge(3, 1, 30);
        g.add_edge(1, 3, 40);
        g.add_vertex(4);
        g
    }

    #[test]
    fn transpose_twice_is_identity() {
        let g = sample();
        assert_eq!(transpose(&transpose(&g)), g);
    }

    #[test]
    fn transpose_swaps_degrees() {
        let g = sample();
        let t = transpose(&g);
        for u in g.vertices() {
            assert_eq!(g.in_degree(u), t.out_degree(u));
            assert_eq!(g.out_degree(u), t.in_degree(u));
        }
    }

    #[test]
    fn symmetrize_balances_degrees() {
        let s = symmetrize(&sample());
        for u in s.vertices() {
            assert_eq!(s.in_degree(u), s.out_degree(u));
        }
        // (3, 1) already existed; its weight survives
        assert_eq!(s.edge_weight(3, 1), Some(30));
    }

    #[test]
    fn unknown_transform_is_rejected() {
        assert!(matches!(
            Transform::parse("collapse"),
            Err(MillError::UnknownTransform(name)) if name == "collapse"
        ));
    }

    #[test]
    fn declared_transforms_fail_explicitly() {
        let g = sample();
        let err = Transform::ClearWeights.apply(&g).unwrap_err();
        assert!(matches!(err, MillError::UnsupportedTransform("clear-weights")));
    }

    #[test]
    fn empty_names_are_noops() {
        let g = sample();
        let out = apply_transforms(g.clone(), &[String::new()]).unwrap();
        assert_eq!(out, g);
    }
}
