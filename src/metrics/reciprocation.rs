//! Per-edge and per-vertex reciprocation.
//!
//! Directed graphs only. In an undirected graph every calculator here
//! returns an empty map: reciprocation has no meaning without direction.

use hashbrown::{HashMap, HashSet};

use crate::graph::GraphView;
use crate::model::*;
use crate::progress::{report_progress_and_check_cancellation, ProgressReporter};
use crate::Result;
use super::{GraphMetricCalculator, VERTICES_PER_PROGRESS_REPORT};

/// Edge id → "the graph also contains the reverse edge".
pub type EdgeReciprocation = HashMap<EdgeId, bool>;

/// Vertex id → reciprocated share of its neighbours, `None` without neighbours.
pub type ReciprocatedVertexPairRatios = HashMap<VertexId, Option<f64>>;

/// Ordered pair keys of every non-self-loop edge.
pub(crate) fn ordered_vertex_pairs<G: GraphView + ?Sized>(graph: &G) -> HashSet<VertexPairKey> {
    graph.edges()
        .iter()
        .filter(|e| !e.is_self_loop())
        .map(|e| VertexPairKey::ordered(e.vertex1, e.vertex2))
        .collect()
}

// ============================================================================
// EdgeReciprocationCalculator
// ============================================================================

/// Flags each directed edge that has an edge running the other way.
///
/// Self-loops are never reciprocated. Duplicate edges each get their own
/// flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeReciprocationCalculator;

impl EdgeReciprocationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// `None` if cancelled at the phase boundary.
    pub fn try_calculate_graph_metrics<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<EdgeReciprocation> {
        let edges = graph.edges();

        if !graph.directedness().is_directed() {
            return Some(EdgeReciprocation::new());
        }

        // Self-loops go into the set too; their reversed key is never looked up.
        let vertex_pairs: HashSet<VertexPairKey> = edges
            .iter()
            .map(|e| VertexPairKey::ordered(e.vertex1, e.vertex2))
            .collect();

        if !report_progress_and_check_cancellation(progress, 1, 2, self.description()) {
            return None;
        }

        let mut flags = EdgeReciprocation::with_capacity(edges.len());
        for edge in edges {
            let reciprocated = !edge.is_self_loop()
                && vertex_pairs.contains(&VertexPairKey::ordered(edge.vertex2, edge.vertex1));
            flags.insert(edge.id, reciprocated);
        }

        tracing::debug!(
            edges = edges.len(),
            reciprocated = flags.values().filter(|&&r| r).count(),
            "calculated edge reciprocation"
        );

        Some(flags)
    }
}

impl GraphMetricCalculator for EdgeReciprocationCalculator {
    type Output = EdgeReciprocation;

    fn description(&self) -> &'static str {
        "reciprocated edges"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<EdgeReciprocation>> {
        Ok(self.try_calculate_graph_metrics(graph, progress))
    }
}

/// Reciprocation flag for every edge of a directed graph.
pub fn calculate_edge_reciprocation<G: GraphView + ?Sized>(
    graph: &G,
    progress: Option<&dyn ProgressReporter>,
) -> Option<EdgeReciprocation> {
    EdgeReciprocationCalculator.try_calculate_graph_metrics(graph, progress)
}

// ============================================================================
// ReciprocatedVertexPairRatioCalculator
// ============================================================================

/// For each vertex, the fraction of its distinct non-self neighbours that it
/// is joined to in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReciprocatedVertexPairRatioCalculator;

impl ReciprocatedVertexPairRatioCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn try_calculate_graph_metrics<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<ReciprocatedVertexPairRatios> {
        let vertices = graph.vertices();
        let mut ratios = ReciprocatedVertexPairRatios::with_capacity(vertices.len());

        if !graph.directedness().is_directed() {
            return Some(ratios);
        }

        let vertex_pairs = ordered_vertex_pairs(graph);

        for (i, vertex) in vertices.iter().enumerate() {
            if i % VERTICES_PER_PROGRESS_REPORT == 0
                && !report_progress_and_check_cancellation(progress, i, vertices.len(), self.description())
            {
                return None;
            }

            ratios.insert(vertex.id, vertex_ratio(graph, vertex.id, &vertex_pairs));
        }

        Some(ratios)
    }
}

fn vertex_ratio<G: GraphView + ?Sized>(
    graph: &G,
    id: VertexId,
    vertex_pairs: &HashSet<VertexPairKey>,
) -> Option<f64> {
    let mut adjacent = 0usize;
    let mut both_directions = 0usize;

    for other in graph.adjacent_vertices(id) {
        if other == id {
            continue;
        }
        adjacent += 1;
        if vertex_pairs.contains(&VertexPairKey::ordered(id, other))
            && vertex_pairs.contains(&VertexPairKey::ordered(other, id))
        {
            both_directions += 1;
        }
    }

    (adjacent > 0).then(|| both_directions as f64 / adjacent as f64)
}

impl GraphMetricCalculator for ReciprocatedVertexPairRatioCalculator {
    type Output = ReciprocatedVertexPairRatios;

    fn description(&self) -> &'static str {
        "reciprocated vertex pair ratios"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<ReciprocatedVertexPairRatios>> {
        Ok(self.try_calculate_graph_metrics(graph, progress))
    }
}
