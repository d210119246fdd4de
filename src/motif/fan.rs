//! Fan motifs: a head vertex with two or more leaves.
//!
//! A leaf is a vertex with exactly one neighbour. The head needs at least
//! two neighbours and at least two of them must be leaves. Arc scale is the
//! leaf count normalized over all fans found in the graph.

use hashbrown::HashMap;

use crate::graph::GraphView;
use crate::metrics::{GraphMetricCalculator, VERTICES_PER_PROGRESS_REPORT};
use crate::model::VertexId;
use crate::progress::{report_progress_and_check_cancellation, ProgressReporter};
use crate::Result;
use super::{normalized_scales, FanMotif, Motif};

#[derive(Debug, Clone, Copy, Default)]
pub struct FanMotifDetector;

impl FanMotifDetector {
    pub fn new() -> Self {
        Self
    }

    /// All fan motifs of `graph`, heads in vertex order, or `None` if
    /// cancelled.
    pub fn try_detect<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<Vec<Motif>> {
        let vertices = graph.vertices();
        let mut adjacent_counts: HashMap<VertexId, usize> = HashMap::new();
        let mut fans: Vec<(VertexId, Vec<VertexId>)> = Vec::new();

        for (i, vertex) in vertices.iter().enumerate() {
            if i % VERTICES_PER_PROGRESS_REPORT == 0
                && !report_progress_and_check_cancellation(progress, i, vertices.len(), self.description())
            {
                return None;
            }

            let adjacent = graph.adjacent_vertices(vertex.id);
            if adjacent.len() < 2 {
                continue;
            }

            let leaves: Vec<VertexId> = adjacent
                .into_iter()
                .filter(|&v| {
                    *adjacent_counts.entry(v).or_insert_with(|| graph.adjacent_vertices(v).len()) == 1
                })
                .collect();

            if leaves.len() >= 2 {
                fans.push((vertex.id, leaves));
            }
        }

        let leaf_counts: Vec<usize> = fans.iter().map(|(_, leaves)| leaves.len()).collect();
        let motifs: Vec<Motif> = fans
            .into_iter()
            .zip(normalized_scales(&leaf_counts))
            .map(|((head_vertex, leaf_vertices), arc_scale)| {
                Motif::Fan(FanMotif { head_vertex, leaf_vertices, arc_scale })
            })
            .collect();

        tracing::debug!(vertices = vertices.len(), motifs = motifs.len(), "detected fan motifs");
        Some(motifs)
    }
}

impl GraphMetricCalculator for FanMotifDetector {
    type Output = Vec<Motif>;

    fn description(&self) -> &'static str {
        "fan motifs"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<Vec<Motif>>> {
        Ok(self.try_detect(graph, progress))
    }
}

pub fn detect_fan_motifs<G: GraphView + ?Sized>(
    graph: &G,
    progress: Option<&dyn ProgressReporter>,
) -> Option<Vec<Motif>> {
    FanMotifDetector.try_detect(graph, progress)
}
