//! Duplicate edge detection.
//!
//! Two edges are duplicates when they join the same pair of vertices. By
//! default the pair is keyed *unordered* whatever the graph's directedness,
//! so in a directed graph `A→B` and `B→A` count as duplicates of each other.
//!
//! [`DuplicateEdgeDetector::respecting_direction`] keys directed graphs by
//! *ordered* pair instead. The reciprocated edge ratio and the overall
//! metrics use that mode: with symmetric keys a reciprocated pair merges into
//! one edge and the ratio could exceed 1.

use std::cell::OnceCell;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::graph::GraphView;
use crate::model::VertexPairKey;
use crate::progress::ProgressReporter;
use crate::Result;
use super::GraphMetricCalculator;

/// Edge counts derived from one graph snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DuplicateEdgeReport {
    /// Edges whose vertex pair occurs exactly once.
    pub unique_edges: usize,
    /// Edges whose vertex pair occurs more than once, all copies counted.
    pub edges_with_duplicates: usize,
    /// Distinct vertex pairs, self-loop pairs excluded.
    pub total_edges_after_merging_duplicates_no_self_loops: usize,
}

impl DuplicateEdgeReport {
    pub fn graph_contains_duplicate_edges(&self) -> bool {
        self.edges_with_duplicates > 0
    }

    pub fn total_edges(&self) -> usize {
        self.unique_edges + self.edges_with_duplicates
    }
}

/// How edge endpoints are turned into a duplicate-detection key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PairKeying {
    /// `(A, B)` and `(B, A)` are the same pair in every graph.
    #[default]
    Unordered,
    /// Ordered pairs in a directed graph, unordered pairs otherwise.
    FollowDirectedness,
}

/// Counts duplicate edges in one graph, lazily and once.
///
/// The counts are computed on first access and cached. The detector borrows
/// the graph, so the snapshot cannot change underneath it.
pub struct DuplicateEdgeDetector<'g, G: GraphView + ?Sized> {
    graph: &'g G,
    keying: PairKeying,
    report: OnceCell<DuplicateEdgeReport>,
}

impl<'g, G: GraphView + ?Sized> DuplicateEdgeDetector<'g, G> {
    /// Symmetric detector: direction never distinguishes two edges.
    pub fn new(graph: &'g G) -> Self {
        Self::with_keying(graph, PairKeying::Unordered)
    }

    /// In a directed graph `A→B` and `B→A` are distinct, not duplicates.
    pub fn respecting_direction(graph: &'g G) -> Self {
        Self::with_keying(graph, PairKeying::FollowDirectedness)
    }

    pub fn with_keying(graph: &'g G, keying: PairKeying) -> Self {
        Self { graph, keying, report: OnceCell::new() }
    }

    pub fn graph_contains_duplicate_edges(&self) -> bool {
        self.report().graph_contains_duplicate_edges()
    }

    pub fn unique_edges(&self) -> usize {
        self.report().unique_edges
    }

    pub fn edges_with_duplicates(&self) -> usize {
        self.report().edges_with_duplicates
    }

    pub fn total_edges_after_merging_duplicates_no_self_loops(&self) -> usize {
        self.report().total_edges_after_merging_duplicates_no_self_loops
    }

    pub fn report(&self) -> DuplicateEdgeReport {
        *self.report.get_or_init(|| count_edges(self.graph, self.keying))
    }
}

fn count_edges<G: GraphView + ?Sized>(graph: &G, keying: PairKeying) -> DuplicateEdgeReport {
    let edges = graph.edges();
    let ordered = keying == PairKeying::FollowDirectedness && graph.directedness().is_directed();

    // vertex pair → "a duplicate of this pair has been seen"
    let mut vertex_pairs: HashMap<VertexPairKey, bool> = HashMap::with_capacity(edges.len());
    let mut unique_edges = 0usize;
    let mut edges_with_duplicates = 0usize;

    for edge in edges {
        let key = VertexPairKey::pack(edge.vertex1, edge.vertex2, ordered);
        match vertex_pairs.get_mut(&key) {
            Some(has_duplicate) => {
                if !*has_duplicate {
                    // First duplicate: the first occurrence stops being unique.
                    unique_edges -= 1;
                    edges_with_duplicates += 1;
                    *has_duplicate = true;
                }
                edges_with_duplicates += 1;
            }
            None => {
                unique_edges += 1;
                vertex_pairs.insert(key, false);
            }
        }
    }

    let merged_no_self_loops = vertex_pairs.keys().filter(|key| !key.is_self_pair()).count();

    tracing::debug!(
        edges = edges.len(),
        ordered,
        unique_edges,
        edges_with_duplicates,
        merged_no_self_loops,
        "counted duplicate edges"
    );

    DuplicateEdgeReport {
        unique_edges,
        edges_with_duplicates,
        total_edges_after_merging_duplicates_no_self_loops: merged_no_self_loops,
    }
}

/// Count unique, duplicated and merged edges of `graph`.
pub fn detect_duplicate_edges<G: GraphView + ?Sized>(graph: &G) -> DuplicateEdgeReport {
    DuplicateEdgeDetector::new(graph).report()
}

/// [`GraphMetricCalculator`] front end for [`DuplicateEdgeDetector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateEdgeCalculator;

impl GraphMetricCalculator for DuplicateEdgeCalculator {
    type Output = DuplicateEdgeReport;

    fn description(&self) -> &'static str {
        "duplicate edges"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        _progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<DuplicateEdgeReport>> {
        Ok(Some(detect_duplicate_edges(graph)))
    }
}
