//! Weakly connected components.

use std::collections::VecDeque;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::graph::GraphView;
use crate::model::VertexId;

/// Summary of a graph's connected components. Edge direction is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectedComponentStats {
    pub connected_components: usize,
    pub single_vertex_connected_components: usize,
    pub maximum_connected_component_vertices: usize,
    /// Largest number of edges (duplicates and self-loops included) in one component.
    pub maximum_connected_component_edges: usize,
}

/// Component index of every vertex, components numbered in discovery order.
pub fn connected_components<G: GraphView + ?Sized>(graph: &G) -> HashMap<VertexId, usize> {
    let mut component_of: HashMap<VertexId, usize> = HashMap::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::new();
    let mut next_component = 0usize;

    for vertex in graph.vertices() {
        if component_of.contains_key(&vertex.id) {
            continue;
        }

        component_of.insert(vertex.id, next_component);
        queue.push_back(vertex.id);

        while let Some(current) = queue.pop_front() {
            for neighbor in graph.adjacent_vertices(current) {
                if !component_of.contains_key(&neighbor) {
                    component_of.insert(neighbor, next_component);
                    queue.push_back(neighbor);
                }
            }
        }

        next_component += 1;
    }

    component_of
}

pub fn connected_component_stats<G: GraphView + ?Sized>(graph: &G) -> ConnectedComponentStats {
    let component_of = connected_components(graph);
    let count = component_of.values().max().map_or(0, |&m| m + 1);

    let mut vertices = vec![0usize; count];
    for &c in component_of.values() {
        vertices[c] += 1;
    }

    let mut edges = vec![0usize; count];
    for edge in graph.edges() {
        if let Some(&c) = component_of.get(&edge.vertex1) {
            edges[c] += 1;
        }
    }

    ConnectedComponentStats {
        connected_components: count,
        single_vertex_connected_components: vertices.iter().filter(|&&n| n == 1).count(),
        maximum_connected_component_vertices: vertices.iter().copied().max().unwrap_or(0),
        maximum_connected_component_edges: edges.iter().copied().max().unwrap_or(0),
    }
}
