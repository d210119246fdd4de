//! Vertex groups attached to a graph as metadata.

use serde::{Deserialize, Serialize};
use super::VertexId;

/// A named set of member vertices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupInfo {
    pub name: Option<String>,
    pub vertices: Vec<VertexId>,
}

impl GroupInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), vertices: Vec::new() }
    }

    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = VertexId>) -> Self {
        self.vertices = vertices.into_iter().collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
