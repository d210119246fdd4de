//! Batch analysis configuration.
//!
//! Selects which calculators [`crate::run_analysis`] runs. Every field has a
//! default, so a partial JSON document (or `{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::motif::dconnector::{DEFAULT_MAX_SPAN_VERTICES, MIN_SPAN_VERTICES};
use crate::{Error, Result};

/// Inclusive bounds on the number of span vertices in a D-connector motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRange {
    pub min: usize,
    pub max: usize,
}

impl Default for SpanRange {
    fn default() -> Self {
        Self { min: MIN_SPAN_VERTICES, max: DEFAULT_MAX_SPAN_VERTICES }
    }
}

/// Which calculators a batch analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub duplicate_edges: bool,
    pub edge_reciprocation: bool,
    pub vertex_reciprocation: bool,
    pub overall_metrics: bool,
    pub group_metrics: bool,
    /// `None` skips D-connector detection.
    pub dconnector_motifs: Option<SpanRange>,
    pub fan_motifs: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            duplicate_edges: true,
            edge_reciprocation: true,
            vertex_reciprocation: true,
            overall_metrics: true,
            group_metrics: true,
            dconnector_motifs: Some(SpanRange::default()),
            fan_motifs: true,
        }
    }
}

impl AnalysisConfig {
    /// Configuration with every calculator turned off.
    pub fn none() -> Self {
        Self {
            duplicate_edges: false,
            edge_reciprocation: false,
            vertex_reciprocation: false,
            overall_metrics: false,
            group_metrics: false,
            dconnector_motifs: None,
            fan_motifs: false,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(range) = self.dconnector_motifs {
            if range.min < MIN_SPAN_VERTICES || range.min > range.max {
                return Err(Error::InvalidSpanRange { min: range.min, max: range.max });
            }
        }
        Ok(())
    }
}
