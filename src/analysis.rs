//! Batch analysis: every configured calculator over one graph.
//!
//! ```text
//! graph + AnalysisConfig → run_analysis() → AnalysisReport → export::to_json_string()
//! ```
//!
//! Calculators run in a fixed order and share one progress reporter. A
//! cancellation in any of them cancels the whole analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::graph::GraphView;
use crate::metrics::*;
use crate::model::*;
use crate::motif::{DConnectorMotifDetector, FanMotif, FanMotifDetector, Motif};
use crate::progress::ProgressReporter;
use crate::Result;

/// Everything one analysis produced. A `None` section was not requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub directedness: Directedness,
    pub vertices: usize,
    pub edges: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_edges: Option<DuplicateEdgeReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_reciprocation: Option<BTreeMap<EdgeId, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_reciprocation: Option<BTreeMap<VertexId, Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_metrics: Option<OverallMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_metrics: Option<BTreeMap<usize, OverallMetrics>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dconnector_motifs: Option<Vec<Motif>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fan_motifs: Option<Vec<Motif>>,
}

impl AnalysisReport {
    fn empty<G: GraphView + ?Sized>(graph: &G) -> Self {
        Self {
            directedness: graph.directedness(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            duplicate_edges: None,
            edge_reciprocation: None,
            vertex_reciprocation: None,
            overall_metrics: None,
            group_metrics: None,
            dconnector_motifs: None,
            fan_motifs: None,
        }
    }

    /// Fan motifs found, if fan detection ran.
    pub fn fans(&self) -> impl Iterator<Item = &FanMotif> {
        self.fan_motifs.iter().flatten().filter_map(Motif::as_fan)
    }
}

/// Run every calculator `config` enables over `graph`.
///
/// `Ok(None)` if any calculator was cancelled; nothing computed so far is
/// returned.
pub fn run_analysis<G: GraphView + ?Sized>(
    graph: &G,
    config: &AnalysisConfig,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Option<AnalysisReport>> {
    config.validate()?;

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = graph.directedness().is_directed(),
        "starting analysis"
    );

    let mut report = AnalysisReport::empty(graph);

    if config.duplicate_edges {
        let Some(duplicates) = run_calculator(&DuplicateEdgeCalculator, graph, progress)? else {
            return Ok(None);
        };
        report.duplicate_edges = Some(duplicates);
    }

    if config.edge_reciprocation {
        let Some(flags) = run_calculator(&EdgeReciprocationCalculator, graph, progress)? else {
            return Ok(None);
        };
        report.edge_reciprocation = Some(flags.into_iter().collect());
    }

    if config.vertex_reciprocation {
        let Some(ratios) = run_calculator(&ReciprocatedVertexPairRatioCalculator, graph, progress)? else {
            return Ok(None);
        };
        report.vertex_reciprocation = Some(ratios.into_iter().collect());
    }

    if config.overall_metrics {
        let Some(metrics) = run_calculator(&BasicOverallMetricsCalculator, graph, progress)? else {
            return Ok(None);
        };
        report.overall_metrics = Some(metrics);
    }

    if config.group_metrics {
        let Some(groups) = run_calculator(&GroupMetricCalculator::new(), graph, progress)? else {
            return Ok(None);
        };
        report.group_metrics = Some(groups);
    }

    if let Some(range) = config.dconnector_motifs {
        let detector = DConnectorMotifDetector::new(range.min, range.max)?;
        let Some(motifs) = run_calculator(&detector, graph, progress)? else {
            return Ok(None);
        };
        report.dconnector_motifs = Some(motifs);
    }

    if config.fan_motifs {
        let Some(motifs) = run_calculator(&FanMotifDetector, graph, progress)? else {
            return Ok(None);
        };
        report.fan_motifs = Some(motifs);
    }

    tracing::debug!("analysis complete");
    Ok(Some(report))
}

fn run_calculator<C, G>(
    calculator: &C,
    graph: &G,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Option<C::Output>>
where
    C: GraphMetricCalculator,
    G: GraphView + ?Sized,
{
    tracing::debug!(calculator = calculator.description(), "running calculator");
    let output = calculator.try_calculate(graph, progress)?;
    if output.is_none() {
        tracing::debug!(calculator = calculator.description(), "calculator cancelled");
    }
    Ok(output)
}
