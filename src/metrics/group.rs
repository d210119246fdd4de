//! Per-group overall metrics.
//!
//! Each non-empty group is cut out of the graph as an induced subgraph (the
//! group's vertices plus the edges with both endpoints inside it) and handed
//! to an [`OverallMetricsCalculator`]. Edges between groups never count
//! toward either group.

use std::collections::BTreeMap;

use crate::graph::{GraphView, MemoryGraph};
use crate::model::GroupInfo;
use crate::progress::{report_progress_and_check_cancellation, ProgressReporter};
use crate::Result;
use super::overall::{BasicOverallMetricsCalculator, OverallMetricsCalculator};
use super::GraphMetricCalculator;

/// Group index → metrics. Indices count non-empty groups only, from 0, in
/// group order.
pub type GroupMetrics<M> = BTreeMap<usize, M>;

/// Runs an overall-metrics calculator once per vertex group.
#[derive(Debug, Clone, Default)]
pub struct GroupMetricCalculator<C = BasicOverallMetricsCalculator> {
    overall: C,
}

impl GroupMetricCalculator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: OverallMetricsCalculator> GroupMetricCalculator<C> {
    /// Use `overall` for each group instead of the built-in calculator.
    pub fn with_overall_calculator(overall: C) -> Self {
        Self { overall }
    }

    /// Metrics for the groups attached to `graph`. A graph without group
    /// metadata yields an empty map.
    pub fn try_calculate_graph_metrics<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<GroupMetrics<C::Metrics>>> {
        match graph.groups() {
            Some(groups) => self.calculate_for_groups(graph, groups, progress),
            None => {
                tracing::debug!("graph has no groups");
                Ok(Some(GroupMetrics::new()))
            }
        }
    }

    /// Metrics for an explicit list of groups over `graph`.
    ///
    /// `Ok(None)` if the calculation was cancelled for any group; results
    /// for the groups already finished are discarded.
    pub fn calculate_for_groups<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        groups: &[GroupInfo],
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<GroupMetrics<C::Metrics>>> {
        let non_empty: Vec<&GroupInfo> = groups.iter().filter(|g| !g.is_empty()).collect();
        let mut results = GroupMetrics::new();

        for (index, group) in non_empty.iter().enumerate() {
            if !report_progress_and_check_cancellation(progress, index, non_empty.len(), self.description()) {
                return Ok(None);
            }

            let subgraph = MemoryGraph::induced_subgraph(graph, &group.vertices)?;

            tracing::trace!(
                index,
                group = group.name.as_deref().unwrap_or(""),
                vertices = subgraph.vertex_count(),
                edges = subgraph.edge_count(),
                "calculating group metrics"
            );

            let Some(metrics) = self.overall.try_calculate_overall_metrics(&subgraph, progress) else {
                tracing::debug!(index, "group metrics cancelled");
                return Ok(None);
            };
            results.insert(index, metrics);
        }

        tracing::debug!(
            groups = groups.len(),
            skipped = groups.len() - non_empty.len(),
            "calculated group metrics"
        );

        Ok(Some(results))
    }
}

impl<C: OverallMetricsCalculator> GraphMetricCalculator for GroupMetricCalculator<C> {
    type Output = GroupMetrics<C::Metrics>;

    fn description(&self) -> &'static str {
        "group metrics"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<Self::Output>> {
        self.try_calculate_graph_metrics(graph, progress)
    }
}

/// Built-in overall metrics for every group attached to `graph`.
pub fn calculate_group_metrics<G: GraphView + ?Sized>(
    graph: &G,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Option<GroupMetrics<super::OverallMetrics>>> {
    GroupMetricCalculator::new().try_calculate_graph_metrics(graph, progress)
}
