//! # Motif Detection
//!
//! Motifs are small recurring structures found by scanning every vertex's
//! neighbourhood:
//!
//! | Detector | Module | Motif |
//! |----------|--------|-------|
//! | `DConnectorMotifDetector` | `dconnector` | anchors sharing one identical span |
//! | `FanMotifDetector` | `fan` | a head vertex with two or more leaves |
//!
//! Both detectors follow the calculator conventions of [`crate::metrics`]:
//! `None` on cancellation, an empty vector when nothing qualifies.

pub mod dconnector;
pub mod fan;

use serde::{Deserialize, Serialize};

use crate::model::VertexId;

pub use dconnector::{detect_dconnector_motifs, DConnectorMotifDetector};
pub use fan::{detect_fan_motifs, FanMotifDetector};

// ============================================================================
// Motif DTOs
// ============================================================================

/// One detected motif.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motif {
    DConnector(DConnectorMotif),
    Fan(FanMotif),
}

impl Motif {
    /// Every vertex taking part in the motif.
    pub fn vertices(&self) -> Vec<VertexId> {
        match self {
            Motif::DConnector(m) => m.anchor_vertices.iter().chain(&m.span_vertices).copied().collect(),
            Motif::Fan(m) => std::iter::once(m.head_vertex).chain(m.leaf_vertices.iter().copied()).collect(),
        }
    }

    /// Normalized size score in `[0, 1]` relative to the other motifs of the
    /// same kind found in the same graph.
    pub fn scale(&self) -> f64 {
        match self {
            Motif::DConnector(m) => m.span_scale,
            Motif::Fan(m) => m.arc_scale,
        }
    }

    pub fn as_dconnector(&self) -> Option<&DConnectorMotif> {
        match self {
            Motif::DConnector(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_fan(&self) -> Option<&FanMotif> {
        match self {
            Motif::Fan(m) => Some(m),
            _ => None,
        }
    }
}

/// Anchor vertices that all have exactly the same non-self neighbours, the
/// span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DConnectorMotif {
    /// In graph vertex order.
    pub anchor_vertices: Vec<VertexId>,
    /// Sorted by id.
    pub span_vertices: Vec<VertexId>,
    pub span_scale: f64,
}

impl DConnectorMotif {
    pub fn vertex_count(&self) -> usize {
        self.anchor_vertices.len() + self.span_vertices.len()
    }
}

/// A head vertex and the leaves (vertices with a single neighbour) hanging
/// off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanMotif {
    pub head_vertex: VertexId,
    pub leaf_vertices: Vec<VertexId>,
    pub arc_scale: f64,
}

// ============================================================================
// Scale normalization
// ============================================================================

/// Map each count onto `[0, 1]` between the smallest and largest count.
/// All-equal counts map to `0.5`.
pub(crate) fn normalized_scales(counts: &[usize]) -> Vec<f64> {
    let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
        return Vec::new();
    };

    counts
        .iter()
        .map(|&count| {
            if min == max {
                0.5
            } else {
                (count - min) as f64 / (max - min) as f64
            }
        })
        .collect()
}
