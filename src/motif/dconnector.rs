//! D-connector motifs.
//!
//! A D-connector is a set of *anchor* vertices whose non-self neighbour sets
//! are identical. That shared neighbour set is the *span*. The detector
//! bounds the span size with a caller-supplied `[min, max]` range and needs
//! at least two anchors per motif.
//!
//! Detection runs in two passes:
//!
//! 1. Every vertex whose neighbour set qualifies joins the candidate keyed by
//!    that set. A set qualifies when its size is within range and none of its
//!    members has exactly one neighbour.
//! 2. Candidates are accepted in first-seen order. A vertex belongs to at
//!    most one accepted motif as an anchor. A candidate whose anchors are
//!    already taken replaces the motifs holding them only if it has more
//!    anchors than each, or as many anchors and more vertices overall.
//!
//! Without step 2 a ring `A-B-C-D-A` would produce two redundant motifs
//! (`{A,C}` over `{B,D}` and `{B,D}` over `{A,C}`).

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::graph::GraphView;
use crate::metrics::{GraphMetricCalculator, VERTICES_PER_PROGRESS_REPORT};
use crate::model::VertexId;
use crate::progress::{report_progress_and_check_cancellation, ProgressReporter};
use crate::{Error, Result};
use super::{normalized_scales, DConnectorMotif, Motif};

/// Smallest span the detector accepts.
pub const MIN_SPAN_VERTICES: usize = 2;

/// Default upper bound on the span size.
pub const DEFAULT_MAX_SPAN_VERTICES: usize = 9999;

/// Sorted span vertex ids; the candidate key.
type SpanKey = SmallVec<[VertexId; 4]>;

#[derive(Debug)]
struct Candidate {
    span: SpanKey,
    anchors: Vec<VertexId>,
}

impl Candidate {
    fn vertex_count(&self) -> usize {
        self.span.len() + self.anchors.len()
    }

    fn beats(&self, other: &Candidate) -> bool {
        self.anchors.len() > other.anchors.len()
            || (self.anchors.len() == other.anchors.len() && self.vertex_count() > other.vertex_count())
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.anchors.iter().chain(self.span.iter()).copied()
    }
}

// ============================================================================
// DConnectorMotifDetector
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DConnectorMotifDetector {
    min_span_vertices: usize,
    max_span_vertices: usize,
}

impl Default for DConnectorMotifDetector {
    fn default() -> Self {
        Self { min_span_vertices: MIN_SPAN_VERTICES, max_span_vertices: DEFAULT_MAX_SPAN_VERTICES }
    }
}

impl DConnectorMotifDetector {
    /// Detector for spans of `min..=max` vertices. `min` must be at least 2
    /// and no larger than `max`.
    pub fn new(min_span_vertices: usize, max_span_vertices: usize) -> Result<Self> {
        if min_span_vertices < MIN_SPAN_VERTICES || min_span_vertices > max_span_vertices {
            return Err(Error::InvalidSpanRange { min: min_span_vertices, max: max_span_vertices });
        }
        Ok(Self { min_span_vertices, max_span_vertices })
    }

    pub fn min_span_vertices(&self) -> usize {
        self.min_span_vertices
    }

    pub fn max_span_vertices(&self) -> usize {
        self.max_span_vertices
    }

    /// All D-connector motifs of `graph`, or `None` if cancelled.
    pub fn try_detect<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<Vec<Motif>> {
        let candidates = self.collect_candidates(graph, progress)?;
        let considered = candidates.len();
        let accepted = resolve_overlaps(candidates);

        let anchor_counts: Vec<usize> = accepted.iter().map(|c| c.anchors.len()).collect();
        let motifs: Vec<Motif> = accepted
            .into_iter()
            .zip(normalized_scales(&anchor_counts))
            .map(|(candidate, span_scale)| {
                Motif::DConnector(DConnectorMotif {
                    anchor_vertices: candidate.anchors,
                    span_vertices: candidate.span.into_vec(),
                    span_scale,
                })
            })
            .collect();

        tracing::debug!(
            vertices = graph.vertex_count(),
            candidates = considered,
            motifs = motifs.len(),
            "detected d-connector motifs"
        );

        Some(motifs)
    }

    /// Pass 1: group vertices by qualifying neighbour set, in first-seen order.
    fn collect_candidates<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Option<Vec<Candidate>> {
        let vertices = graph.vertices();
        let mut candidates: Vec<Candidate> = Vec::new();
        let mut by_span: HashMap<SpanKey, usize> = HashMap::new();
        let mut adjacent_counts: HashMap<VertexId, usize> = HashMap::new();

        for (i, vertex) in vertices.iter().enumerate() {
            if i % VERTICES_PER_PROGRESS_REPORT == 0
                && !report_progress_and_check_cancellation(progress, i, vertices.len(), self.description())
            {
                return None;
            }

            let mut span: SpanKey = graph
                .adjacent_vertices(vertex.id)
                .into_iter()
                .filter(|&other| other != vertex.id)
                .collect();

            if !self.span_qualifies(graph, &span, &mut adjacent_counts) {
                continue;
            }
            span.sort_unstable();

            let slot = match by_span.get(&span) {
                Some(&slot) => slot,
                None => {
                    by_span.insert(span.clone(), candidates.len());
                    candidates.push(Candidate { span, anchors: Vec::new() });
                    candidates.len() - 1
                }
            };
            candidates[slot].anchors.push(vertex.id);
        }

        Some(candidates)
    }

    fn span_qualifies<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        span: &[VertexId],
        adjacent_counts: &mut HashMap<VertexId, usize>,
    ) -> bool {
        if span.len() < self.min_span_vertices || span.len() > self.max_span_vertices {
            return false;
        }
        // A span vertex with a single neighbour only ever touches one anchor.
        span.iter().all(|&v| {
            *adjacent_counts.entry(v).or_insert_with(|| graph.adjacent_vertices(v).len()) != 1
        })
    }
}

/// Pass 2: keep candidates with two or more anchors, resolving shared anchors.
fn resolve_overlaps(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut accepted: Vec<Option<Candidate>> = Vec::new();
    // vertex → slot in `accepted` of the motif that last claimed it
    let mut owner: HashMap<VertexId, usize> = HashMap::new();

    for candidate in candidates.into_iter().filter(|c| c.anchors.len() >= 2) {
        let mut rivals: SmallVec<[usize; 4]> =
            candidate.anchors.iter().filter_map(|v| owner.get(v).copied()).collect();
        rivals.sort_unstable();
        rivals.dedup();

        let wins = rivals
            .iter()
            .all(|&slot| accepted[slot].as_ref().is_none_or(|rival| candidate.beats(rival)));
        if !wins {
            continue;
        }

        for slot in rivals {
            if let Some(rival) = accepted[slot].take() {
                for v in rival.vertices() {
                    if owner.get(&v) == Some(&slot) {
                        owner.remove(&v);
                    }
                }
            }
        }

        let slot = accepted.len();
        for v in candidate.vertices() {
            owner.insert(v, slot);
        }
        accepted.push(Some(candidate));
    }

    accepted.into_iter().flatten().collect()
}

impl GraphMetricCalculator for DConnectorMotifDetector {
    type Output = Vec<Motif>;

    fn description(&self) -> &'static str {
        "d-connector motifs"
    }

    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<Vec<Motif>>> {
        Ok(self.try_detect(graph, progress))
    }
}

/// D-connector motifs of `graph` whose span has `min..=max` vertices.
pub fn detect_dconnector_motifs<G: GraphView + ?Sized>(
    graph: &G,
    min_span_vertices: usize,
    max_span_vertices: usize,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Option<Vec<Motif>>> {
    Ok(DConnectorMotifDetector::new(min_span_vertices, max_span_vertices)?.try_detect(graph, progress))
}
