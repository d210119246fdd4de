//! Edge in the graph.

use serde::{Deserialize, Serialize};
use super::VertexId;

/// Edge identifier, unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a graph's edges carry direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directedness {
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }
}

/// An edge between two vertices.
///
/// `vertex1 -> vertex2` is meaningful only in a directed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub vertex1: VertexId,
    pub vertex2: VertexId,
}

impl Edge {
    pub fn new(id: EdgeId, vertex1: VertexId, vertex2: VertexId) -> Self {
        Self { id, vertex1, vertex2 }
    }

    pub fn is_self_loop(&self) -> bool {
        self.vertex1 == self.vertex2
    }

    /// The "other" end of the edge from the given vertex.
    pub fn other_vertex(&self, from: VertexId) -> Option<VertexId> {
        if from == self.vertex1 { Some(self.vertex2) }
        else if from == self.vertex2 { Some(self.vertex1) }
        else { None }
    }
}
