//! Overall (whole-graph) metrics.
//!
//! [`OverallMetricsCalculator`] is the seam the group calculator delegates
//! through: hosts with a richer metric catalog plug in their own
//! implementation. [`BasicOverallMetricsCalculator`] is the built-in one.

use serde::{Deserialize, Serialize};

use crate::graph::{GraphView, MemoryGraph};
use crate::model::Directedness;
use crate::progress::{report_progress_and_check_cancellation, ProgressReporter};
use crate::Result;
use super::components::{connected_component_stats, ConnectedComponentStats};
use super::duplicates::DuplicateEdgeDetector;
use super::overall_reciprocation::OverallReciprocationCalculator;
use super::GraphMetricCalculator;

/// Computes one metrics summary for a whole graph.
pub trait OverallMetricsCalculator {
    type Metrics;

    /// `None` if the calculation was cancelled.
    fn try_calculate_overall_metrics(
        &self,
        graph: &MemoryGraph,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<Self::Metrics>;
}

/// Whole-graph summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    pub directedness: Directedness,
    pub vertices: usize,
    pub unique_edges: usize,
    pub edges_with_duplicates: usize,
    pub self_loops: usize,
    /// `None` with fewer than two vertices.
    pub graph_density: Option<f64>,
    #[serde(flatten)]
    pub components: ConnectedComponentStats,
    pub reciprocated_vertex_pair_ratio: Option<f64>,
    pub reciprocated_edge_ratio: Option<f64>,
}

impl OverallMetrics {
    pub fn total_edges(&self) -> usize {
        self.unique_edges + self.edges_with_duplicates
    }
}

/// Built-in overall metrics: edge counts, density, connected components and
/// reciprocation ratios.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicOverallMetricsCalculator;

impl BasicOverallMetricsCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn try_calculate_graph_metrics<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<OverallMetrics> {
        if !report_progress_and_check_cancellation(progress, 1, 3, self.description()) {
            return None;
        }

        let duplicates = DuplicateEdgeDetector::respecting_direction(graph).report();
        let vertices = graph.vertex_count();
        let self_loops = graph.edges().iter().filter(|e| e.is_self_loop()).count();
        let components = connected_component_stats(graph);

        if !report_progress_and_check_cancellation(progress, 2, 3, self.description()) {
            return None;
        }

        let ratios = OverallReciprocationCalculator.try_calculate_graph_metrics(graph, progress)?;

        let metrics = OverallMetrics {
            directedness: graph.directedness(),
            vertices,
            unique_edges: duplicates.unique_edges,
            edges_with_duplicates: duplicates.edges_with_duplicates,
            self_loops,
            graph_density: graph_density(
                graph.directedness(),
                vertices,
                duplicates.total_edges_after_merging_duplicates_no_self_loops,
            ),
            components,
            reciprocated_vertex_pair_ratio: ratios.reciprocated_vertex_pair_ratio,
            reciprocated_edge_ratio: ratios.reciprocated_edge_ratio,
        };

        tracing::debug!(vertices, edges = metrics.total_edges(), "calculated overall metrics");
        Some(metrics)
    }
}

/// `2m / (n(n-1))`, halved for directed graphs.
fn graph_density(directedness: Directedness, vertices: usize, merged_edges: usize) -> Option<f64> {
    if vertices < 2 {
        return None;
    }
    let n = vertices as f64;
    let mut density = 2.0 * merged_edges as f64 / (n * (n - 1.0));
    if directedness.is_directed() {
        density /= 2.0;
    }
    Some(density.max(0.0))
}

impl OverallMetricsCalculator for BasicOverallMetricsCalculator {
    type Metrics = OverallMetrics;

    fn try_calculate_overall_metrics(
        &self,
        graph: &MemoryGraph,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<OverallMetrics> {
        self.try_calculate_graph_metrics(graph, progress)
    }
}

impl GraphMetricCalculator for BasicOverallMetricsCalculator {
    type Output = OverallMetrics;

    fn description(&self) -> &'static str {
        "overall metrics"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<OverallMetrics>> {
        Ok(self.try_calculate_graph_metrics(graph, progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressLog;

    #[test]
    fn test_undirected_triangle_with_extras() {
        let mut g = MemoryGraph::undirected();
        let a = g.add_vertex().unwrap();
        let b = g.add_vertex().unwrap();
        let c = g.add_vertex().unwrap();
        g.add_vertex().unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, c).unwrap();
        g.add_edge(c, a).unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(c, c).unwrap();

        let m = BasicOverallMetricsCalculator.try_calculate_graph_metrics(&g, None).unwrap();

        assert_eq!(m.vertices, 4);
        assert_eq!(m.unique_edges, 3);
        assert_eq!(m.edges_with_duplicates, 2);
        assert_eq!(m.total_edges(), 5);
        assert_eq!(m.self_loops, 1);
        // 3 merged edges over 4 vertices: 6 / 12
        assert_eq!(m.graph_density, Some(0.5));
        assert_eq!(m.components.connected_components, 2);
        assert_eq!(m.components.maximum_connected_component_edges, 5);
        assert_eq!(m.reciprocated_vertex_pair_ratio, None);
    }

    #[test]
    fn test_directed_density_halved() {
        let mut g = MemoryGraph::directed();
        let a = g.add_vertex().unwrap();
        let b = g.add_vertex().unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();

        let m = BasicOverallMetricsCalculator.try_calculate_graph_metrics(&g, None).unwrap();
        assert_eq!(m.unique_edges, 2);
        assert_eq!(m.graph_density, Some(1.0));
        assert_eq!(m.reciprocated_vertex_pair_ratio, Some(1.0));
        assert_eq!(m.reciprocated_edge_ratio, Some(1.0));
    }

    #[test]
    fn test_single_vertex_density_not_applicable() {
        let mut g = MemoryGraph::undirected();
        g.add_vertex().unwrap();
        let m = BasicOverallMetricsCalculator.try_calculate_graph_metrics(&g, None).unwrap();
        assert_eq!(m.graph_density, None);
        assert_eq!(m.components.single_vertex_connected_components, 1);
    }

    #[test]
    fn test_cancelled_between_phases() {
        let mut g = MemoryGraph::undirected();
        g.add_vertex().unwrap();
        let log = ProgressLog::cancel_after_reports(1);
        assert!(BasicOverallMetricsCalculator.try_calculate_graph_metrics(&g, Some(&log)).is_none());
        assert_eq!(log.len(), 1);
    }
}
