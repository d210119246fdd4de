//! End-to-end tests for duplicate edge detection.
//!
//! Each test builds a graph through the public API and reads the counts back
//! through `DuplicateEdgeDetector`.

use std::cell::Cell;

use netmetrics::metrics::{detect_duplicate_edges, DuplicateEdgeCalculator};
use netmetrics::{
    Directedness, DuplicateEdgeDetector, DuplicateEdgeReport, Edge, EdgeId, GraphMetricCalculator,
    GraphView, MemoryGraph, Vertex, VertexId,
};
use pretty_assertions::assert_eq;

fn graph(directedness: Directedness, vertices: u32, edges: &[(u32, u32)]) -> MemoryGraph {
    let mut g = MemoryGraph::new(directedness);
    for _ in 0..vertices {
        g.add_vertex().unwrap();
    }
    for &(a, b) in edges {
        g.add_edge(VertexId(a), VertexId(b)).unwrap();
    }
    g
}

/// Graph double that counts how often its edge list is read.
struct CountingGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    edge_reads: Cell<usize>,
}

impl GraphView for CountingGraph {
    fn directedness(&self) -> Directedness {
        Directedness::Undirected
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        self.edge_reads.set(self.edge_reads.get() + 1);
        &self.edges
    }
}

// ============================================================================
// 1. Mixed graph: unique, duplicated, self-loops
// ============================================================================

#[test]
fn test_mixed_graph_counts() {
    let g = graph(
        Directedness::Undirected,
        4,
        &[(1, 2), (2, 3), (3, 2), (3, 2), (4, 4), (4, 4), (1, 4)],
    );
    let d = DuplicateEdgeDetector::new(&g);

    assert!(d.graph_contains_duplicate_edges());
    assert_eq!(
        d.report(),
        DuplicateEdgeReport {
            unique_edges: 2,
            edges_with_duplicates: 5,
            total_edges_after_merging_duplicates_no_self_loops: 3,
        }
    );
    assert_eq!(d.report().total_edges(), g.edge_count());
}

// ============================================================================
// 2. No edges at all
// ============================================================================

#[test]
fn test_edgeless_graph() {
    let g = graph(Directedness::Directed, 3, &[]);
    let report = detect_duplicate_edges(&g);
    assert_eq!(report, DuplicateEdgeReport::default());
    assert!(!report.graph_contains_duplicate_edges());
}

// ============================================================================
// 3. Directed reverse edges are symmetric duplicates
// ============================================================================

#[test]
fn test_directed_reverse_edges_count_as_duplicates() {
    // The default detector ignores direction even in a directed graph: A→B
    // and B→A share one vertex pair. `respecting_direction` tells them apart.
    let g = graph(Directedness::Directed, 2, &[(1, 2), (2, 1)]);

    let symmetric = detect_duplicate_edges(&g);
    assert!(symmetric.graph_contains_duplicate_edges());
    assert_eq!(symmetric.unique_edges, 0);
    assert_eq!(symmetric.edges_with_duplicates, 2);
    assert_eq!(symmetric.total_edges_after_merging_duplicates_no_self_loops, 1);

    let directed = DuplicateEdgeDetector::respecting_direction(&g).report();
    assert!(!directed.graph_contains_duplicate_edges());
    assert_eq!(directed.total_edges_after_merging_duplicates_no_self_loops, 2);
}

// ============================================================================
// 4. Counts are computed once and cached
// ============================================================================

#[test]
fn test_accessors_are_idempotent_and_cached() {
    let g = CountingGraph {
        vertices: (1..=3).map(|i| Vertex::new(VertexId(i))).collect(),
        edges: vec![
            Edge::new(EdgeId(1), VertexId(1), VertexId(2)),
            Edge::new(EdgeId(2), VertexId(2), VertexId(1)),
            Edge::new(EdgeId(3), VertexId(2), VertexId(3)),
        ],
        edge_reads: Cell::new(0),
    };

    let d = DuplicateEdgeDetector::new(&g);
    assert_eq!(g.edge_reads.get(), 0, "construction must not scan");

    let first = (
        d.graph_contains_duplicate_edges(),
        d.unique_edges(),
        d.edges_with_duplicates(),
        d.total_edges_after_merging_duplicates_no_self_loops(),
    );
    let reads_after_first = g.edge_reads.get();
    assert_eq!(reads_after_first, 1);

    for _ in 0..3 {
        let again = (
            d.graph_contains_duplicate_edges(),
            d.unique_edges(),
            d.edges_with_duplicates(),
            d.total_edges_after_merging_duplicates_no_self_loops(),
        );
        assert_eq!(again, first);
    }
    assert_eq!(g.edge_reads.get(), reads_after_first);
    assert_eq!(first, (true, 1, 2, 2));
}

// ============================================================================
// 5. Uniform calculator front end
// ============================================================================

#[test]
fn test_calculator_front_end() {
    let g = graph(Directedness::Undirected, 2, &[(1, 2), (1, 2)]);
    let calculator = DuplicateEdgeCalculator;
    assert_eq!(calculator.description(), "duplicate edges");

    let report = calculator.try_calculate(&g, None).unwrap().unwrap();
    assert_eq!(report.edges_with_duplicates, 2);
}
