//! # Graph View Trait
//!
//! This is THE contract between the calculators and any graph container.
//! Every calculator in this crate reads a graph exclusively through
//! [`GraphView`], so hosts can run them over their own storage without
//! copying it into a [`MemoryGraph`] first.
//!
//! Calculators assume exclusive read access for the duration of a call: the
//! graph must not be mutated concurrently, and no calculator keeps a borrow
//! past its return.
//!
//! ## Implementations
//!
//! | Container | Module | Description |
//! |-----------|--------|-------------|
//! | `MemoryGraph` | `memory` | In-memory reference container; induced subgraphs |

pub mod memory;

use hashbrown::HashSet;
use crate::model::*;

pub use memory::MemoryGraph;

// ============================================================================
// GraphView Trait
// ============================================================================

/// Read-only view of a graph.
///
/// Only `directedness`, `vertices` and `edges` are required. The remaining
/// methods have scanning defaults that containers with an adjacency index
/// should override.
pub trait GraphView {
    /// Whether edge direction is meaningful.
    fn directedness(&self) -> Directedness;

    /// All vertices. Order is irrelevant to every metric except where a
    /// calculator documents a tie-break on encounter order.
    fn vertices(&self) -> &[Vertex];

    /// All edges, duplicates and self-loops included.
    fn edges(&self) -> &[Edge];

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices().iter().any(|v| v.id == id)
    }

    /// Distinct vertices joined to `id` by an edge in either direction, in
    /// first-encounter order. A vertex with a self-loop is its own neighbour.
    ///
    /// Default: full edge scan.
    fn adjacent_vertices(&self, id: VertexId) -> Vec<VertexId> {
        let mut seen = HashSet::new();
        let mut adjacent = Vec::new();
        for edge in self.edges() {
            if let Some(other) = edge.other_vertex(id) {
                if seen.insert(other) {
                    adjacent.push(other);
                }
            }
        }
        adjacent
    }

    /// Group metadata attached to the graph, if any.
    fn groups(&self) -> Option<&[GroupInfo]> {
        None
    }
}

impl<G: GraphView + ?Sized> GraphView for &G {
    fn directedness(&self) -> Directedness { (**self).directedness() }
    fn vertices(&self) -> &[Vertex] { (**self).vertices() }
    fn edges(&self) -> &[Edge] { (**self).edges() }
    fn vertex_count(&self) -> usize { (**self).vertex_count() }
    fn edge_count(&self) -> usize { (**self).edge_count() }
    fn contains_vertex(&self, id: VertexId) -> bool { (**self).contains_vertex(id) }
    fn adjacent_vertices(&self, id: VertexId) -> Vec<VertexId> { (**self).adjacent_vertices(id) }
    fn groups(&self) -> Option<&[GroupInfo]> { (**self).groups() }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare container relying on every default method.
    struct EdgeList {
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
    }

    impl GraphView for EdgeList {
        fn directedness(&self) -> Directedness { Directedness::Undirected }
        fn vertices(&self) -> &[Vertex] { &self.vertices }
        fn edges(&self) -> &[Edge] { &self.edges }
    }

    #[test]
    fn test_default_adjacency_scan() {
        let g = EdgeList {
            vertices: (1..=3).map(|i| Vertex::new(VertexId(i))).collect(),
            edges: vec![
                Edge::new(EdgeId(1), VertexId(1), VertexId(2)),
                Edge::new(EdgeId(2), VertexId(2), VertexId(1)),
                Edge::new(EdgeId(3), VertexId(1), VertexId(1)),
                Edge::new(EdgeId(4), VertexId(3), VertexId(1)),
            ],
        };

        assert_eq!(g.adjacent_vertices(VertexId(1)), vec![VertexId(2), VertexId(1), VertexId(3)]);
        assert_eq!(g.adjacent_vertices(VertexId(2)), vec![VertexId(1)]);
        assert!(g.contains_vertex(VertexId(3)));
        assert!(!g.contains_vertex(VertexId(4)));
        assert!(g.groups().is_none());
    }
}
