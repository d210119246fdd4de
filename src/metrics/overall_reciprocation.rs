//! Graph-level reciprocation ratios.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::graph::GraphView;
use crate::model::VertexPairKey;
use crate::progress::{report_progress_and_check_cancellation, ProgressReporter};
use crate::Result;
use super::duplicates::DuplicateEdgeDetector;
use super::GraphMetricCalculator;

/// Reciprocation ratios of a whole graph.
///
/// `None` means "not applicable": the graph is undirected or the ratio's
/// denominator is zero. It is never conflated with `Some(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReciprocationRatios {
    /// Vertex pairs joined in both directions / vertex pairs joined at all.
    pub reciprocated_vertex_pair_ratio: Option<f64>,
    /// Edges in a reciprocated pair / edges after merging duplicates, no self-loops.
    pub reciprocated_edge_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OverallReciprocationCalculator;

impl OverallReciprocationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// `None` if cancelled after the edge scan.
    pub fn try_calculate_graph_metrics<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<ReciprocationRatios> {
        if !graph.directedness().is_directed() {
            return Some(ReciprocationRatios::default());
        }

        let mut ordered = HashSet::new();
        let mut unordered = HashSet::new();
        for edge in graph.edges().iter().filter(|e| !e.is_self_loop()) {
            ordered.insert(VertexPairKey::ordered(edge.vertex1, edge.vertex2));
            unordered.insert(VertexPairKey::unordered(edge.vertex1, edge.vertex2));
        }

        if !report_progress_and_check_cancellation(progress, 1, 2, self.description()) {
            return None;
        }

        let both_directions = count_vertex_pairs_with_both_directed_edges(&ordered);

        let reciprocated_vertex_pair_ratio = (!unordered.is_empty())
            .then(|| both_directions as f64 / unordered.len() as f64);

        let merged = DuplicateEdgeDetector::respecting_direction(graph)
            .total_edges_after_merging_duplicates_no_self_loops();
        let reciprocated_edge_ratio = (merged > 0)
            .then(|| (both_directions * 2) as f64 / merged as f64);

        tracing::debug!(
            vertex_pairs = unordered.len(),
            both_directions,
            ?reciprocated_vertex_pair_ratio,
            ?reciprocated_edge_ratio,
            "calculated overall reciprocation"
        );

        Some(ReciprocationRatios { reciprocated_vertex_pair_ratio, reciprocated_edge_ratio })
    }
}

fn count_vertex_pairs_with_both_directed_edges(ordered: &HashSet<VertexPairKey>) -> usize {
    // Each reciprocated pair is seen once from each side.
    let seen = ordered.iter().filter(|key| ordered.contains(&key.reversed())).count();
    debug_assert!(seen % 2 == 0);
    seen / 2
}

impl GraphMetricCalculator for OverallReciprocationCalculator {
    type Output = ReciprocationRatios;

    fn description(&self) -> &'static str {
        "overall reciprocation"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<ReciprocationRatios>> {
        Ok(self.try_calculate_graph_metrics(graph, progress))
    }
}

/// Reciprocated vertex pair ratio and reciprocated edge ratio of `graph`.
pub fn calculate_overall_reciprocation<G: GraphView + ?Sized>(
    graph: &G,
    progress: Option<&dyn ProgressReporter>,
) -> Option<ReciprocationRatios> {
    OverallReciprocationCalculator.try_calculate_graph_metrics(graph, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MemoryGraph;
    use crate::model::VertexId;
    use crate::progress::ProgressLog;

    fn directed(vertices: u32, edges: &[(u32, u32)]) -> MemoryGraph {
        let mut g = MemoryGraph::directed();
        for _ in 0..vertices {
            g.add_vertex().unwrap();
        }
        for &(a, b) in edges {
            g.add_edge(VertexId(a), VertexId(b)).unwrap();
        }
        g
    }

    #[test]
    fn test_mixed_graph() {
        // pairs {1,2} both ways, {2,3} one way, {3,4} one way (duplicated)
        let g = directed(4, &[(1, 2), (2, 1), (2, 3), (3, 4), (3, 4), (4, 4)]);
        let r = calculate_overall_reciprocation(&g, None).unwrap();
        assert_eq!(r.reciprocated_vertex_pair_ratio, Some(1.0 / 3.0));
        // 1 reciprocated pair = 2 edges, over 4 distinct directed edges
        assert_eq!(r.reciprocated_edge_ratio, Some(0.5));
    }

    #[test]
    fn test_only_self_loops_not_applicable() {
        let g = directed(2, &[(1, 1), (2, 2)]);
        let r = calculate_overall_reciprocation(&g, None).unwrap();
        assert_eq!(r, ReciprocationRatios { reciprocated_vertex_pair_ratio: None, reciprocated_edge_ratio: None });
    }

    #[test]
    fn test_fully_reciprocated() {
        let g = directed(3, &[(1, 2), (2, 1), (2, 3), (3, 2)]);
        let r = calculate_overall_reciprocation(&g, None).unwrap();
        assert_eq!(r.reciprocated_vertex_pair_ratio, Some(1.0));
        assert_eq!(r.reciprocated_edge_ratio, Some(1.0));
    }

    #[test]
    fn test_cancelled() {
        let g = directed(2, &[(1, 2)]);
        let log = ProgressLog::cancel_after_reports(0);
        assert!(calculate_overall_reciprocation(&g, Some(&log)).is_none());
        assert!(log.is_empty());
    }
}
