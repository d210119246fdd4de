//! # netmetrics: Structural Metrics and Motifs for Graphs
//!
//! Calculators for duplicate edges, reciprocation, whole-graph and per-group
//! metrics, plus D-connector and fan motif detection.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphView` is the contract between calculators and graph storage
//! 2. **Clean DTOs**: `Vertex`, `Edge`, `GroupInfo`, `Motif` cross all boundaries
//! 3. **Cooperative cancellation**: calculators poll an injected `ProgressReporter`
//!    and return `None` when asked to stop
//! 4. **No hidden state**: every calculation is a pure function of one graph snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use netmetrics::{MemoryGraph, AnalysisConfig, run_analysis};
//!
//! # fn example() -> netmetrics::Result<()> {
//! let mut graph = MemoryGraph::directed();
//! let a = graph.add_named_vertex("a")?;
//! let b = graph.add_named_vertex("b")?;
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, a)?;
//!
//! let report = run_analysis(&graph, &AnalysisConfig::default(), None)?
//!     .expect("no reporter, so never cancelled");
//! println!("{}", netmetrics::export::to_json_string(&report)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Calculators
//!
//! | Calculator | Module | Output |
//! |------------|--------|--------|
//! | `DuplicateEdgeDetector` | `metrics::duplicates` | unique / duplicated / merged edge counts |
//! | `EdgeReciprocationCalculator` | `metrics::reciprocation` | per-edge reciprocated flag |
//! | `ReciprocatedVertexPairRatioCalculator` | `metrics::reciprocation` | per-vertex ratio |
//! | `OverallReciprocationCalculator` | `metrics::overall_reciprocation` | graph-level ratios |
//! | `BasicOverallMetricsCalculator` | `metrics::overall` | whole-graph summary |
//! | `GroupMetricCalculator` | `metrics::group` | summary per vertex group |
//! | `DConnectorMotifDetector` | `motif::dconnector` | D-connector motifs |
//! | `FanMotifDetector` | `motif::fan` | fan motifs |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod progress;
pub mod metrics;
pub mod motif;
pub mod config;
pub mod analysis;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Vertex, VertexId, Edge, EdgeId, Directedness,
    GroupInfo, VertexPairKey,
};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{GraphView, MemoryGraph};

// ============================================================================
// Re-exports: Progress
// ============================================================================

pub use progress::{
    ProgressReporter, ProgressUpdate, CancellationToken, ProgressLog,
    report_progress_and_check_cancellation,
};

// ============================================================================
// Re-exports: Calculators
// ============================================================================

pub use metrics::{
    GraphMetricCalculator,
    DuplicateEdgeDetector, DuplicateEdgeReport,
    EdgeReciprocationCalculator, ReciprocatedVertexPairRatioCalculator,
    OverallReciprocationCalculator, ReciprocationRatios,
    OverallMetricsCalculator, BasicOverallMetricsCalculator, OverallMetrics,
    GroupMetricCalculator,
};

pub use motif::{Motif, DConnectorMotif, FanMotif, DConnectorMotifDetector, FanMotifDetector};

// ============================================================================
// Re-exports: Batch analysis
// ============================================================================

pub use config::{AnalysisConfig, SpanRange};
pub use analysis::{run_analysis, AnalysisReport};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("Duplicate vertex id: {0}")]
    DuplicateVertex(VertexId),

    #[error("Duplicate edge id: {0}")]
    DuplicateEdge(EdgeId),

    #[error("Id space exhausted: ids must fit in 32 bits")]
    IdSpaceExhausted,

    #[error("Invalid D-connector span range: min {min}, max {max} (need 2 <= min <= max)")]
    InvalidSpanRange { min: usize, max: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
