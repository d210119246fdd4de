//! # Graph Metric Calculators
//!
//! Every calculator here reads its input through [`GraphView`] and follows
//! the same result convention:
//!
//! - `Ok(Some(..))`: completed.
//! - `Ok(None)`: cancelled through the [`ProgressReporter`]. No partial
//!   results are returned.
//! - `Err(..)`: a precondition was violated (bad arguments, bad groups).
//!
//! "Not applicable" values live *inside* a completed result, as `None`
//! ratios or empty maps, never in the outer `Option`.
//!
//! | Calculator | Module | Output |
//! |------------|--------|--------|
//! | `DuplicateEdgeCalculator` | `duplicates` | `DuplicateEdgeReport` |
//! | `EdgeReciprocationCalculator` | `reciprocation` | edge id → reciprocated |
//! | `ReciprocatedVertexPairRatioCalculator` | `reciprocation` | vertex id → ratio |
//! | `OverallReciprocationCalculator` | `overall_reciprocation` | `ReciprocationRatios` |
//! | `BasicOverallMetricsCalculator` | `overall` | `OverallMetrics` |
//! | `GroupMetricCalculator` | `group` | group index → metrics |

pub mod duplicates;
pub mod reciprocation;
pub mod overall_reciprocation;
pub mod components;
pub mod overall;
pub mod group;

use crate::graph::GraphView;
use crate::progress::ProgressReporter;
use crate::Result;

pub use duplicates::{
    detect_duplicate_edges, DuplicateEdgeCalculator, DuplicateEdgeDetector, DuplicateEdgeReport,
    PairKeying,
};
pub use reciprocation::{
    calculate_edge_reciprocation, EdgeReciprocation, EdgeReciprocationCalculator,
    ReciprocatedVertexPairRatioCalculator, ReciprocatedVertexPairRatios,
};
pub use overall_reciprocation::{
    calculate_overall_reciprocation, OverallReciprocationCalculator, ReciprocationRatios,
};
pub use components::{connected_component_stats, connected_components, ConnectedComponentStats};
pub use overall::{BasicOverallMetricsCalculator, OverallMetrics, OverallMetricsCalculator};
pub use group::{calculate_group_metrics, GroupMetricCalculator, GroupMetrics};

/// Per-vertex loops check for cancellation every this many vertices,
/// starting with the first.
pub const VERTICES_PER_PROGRESS_REPORT: usize = 100;

// ============================================================================
// GraphMetricCalculator Trait
// ============================================================================

/// Common shape of every calculator, so hosts can drive them uniformly.
pub trait GraphMetricCalculator {
    type Output;

    /// Short lowercase phrase used in progress messages, e.g.
    /// `"reciprocated edges"` → `"Calculating reciprocated edges."`.
    fn description(&self) -> &'static str;

    /// Run the calculation. `Ok(None)` means it was cancelled.
    fn try_calculate<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Option<Self::Output>>;
}
