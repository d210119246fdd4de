//! Vertex in the graph.

use serde::{Deserialize, Serialize};

/// Vertex identifier, unique within one graph and stable for its lifetime.
///
/// Ids are 32 bits wide so that two of them pack into one
/// [`VertexPairKey`](super::VertexPairKey).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    /// Optional display name, carried into reports.
    pub name: Option<String>,
}

impl Vertex {
    pub fn new(id: VertexId) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
