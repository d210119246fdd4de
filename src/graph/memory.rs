//! In-memory graph container.
//!
//! This is the reference implementation of `GraphView`. Vertices and edges
//! live in insertion-ordered vectors with hash indexes beside them, plus a
//! per-vertex list of incident edge ids.
//!
//! ## Limitations
//!
//! - **Append-only**: vertices and edges can be added, never removed. The
//!   calculators treat a graph as an immutable snapshot anyway.
//! - **No interior locking**: mutation needs `&mut self`. Share a built graph
//!   across threads by reference.
//!
//! Use this container for:
//! - Tests and embedding the calculators in applications without a graph store
//! - Induced subgraphs for per-group metrics

use hashbrown::{HashMap, HashSet};

use crate::model::*;
use crate::{Error, Result};
use super::GraphView;

// ============================================================================
// MemoryGraph
// ============================================================================

/// In-memory graph.
#[derive(Debug, Clone)]
pub struct MemoryGraph {
    directedness: Directedness,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    vertex_index: HashMap<VertexId, usize>,
    edge_index: HashMap<EdgeId, usize>,
    /// vertex id → incident edge ids (a self-loop is listed once)
    adjacency: HashMap<VertexId, Vec<EdgeId>>,
    groups: Option<Vec<GroupInfo>>,
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl MemoryGraph {
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            vertices: Vec::new(),
            edges: Vec::new(),
            vertex_index: HashMap::new(),
            edge_index: HashMap::new(),
            adjacency: HashMap::new(),
            groups: None,
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    // ========================================================================
    // Vertices
    // ========================================================================

    /// Add a vertex with the next free id.
    pub fn add_vertex(&mut self) -> Result<VertexId> {
        let id = VertexId(next_id(&mut self.next_vertex_id)?);
        self.insert_vertex(Vertex::new(id))?;
        Ok(id)
    }

    pub fn add_named_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let id = VertexId(next_id(&mut self.next_vertex_id)?);
        self.insert_vertex(Vertex::new(id).with_name(name))?;
        Ok(id)
    }

    /// Add a vertex with a caller-chosen id. Later auto-assigned ids skip past it.
    pub fn add_vertex_with_id(&mut self, id: VertexId) -> Result<()> {
        self.insert_vertex(Vertex::new(id))
    }

    fn insert_vertex(&mut self, vertex: Vertex) -> Result<()> {
        let id = vertex.id;
        if self.vertex_index.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }
        self.next_vertex_id = self.next_vertex_id.max(id.0 as u64 + 1);
        self.vertex_index.insert(id, self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_index.get(&id).map(|&i| &self.vertices[i])
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Add an edge with the next free id. Both endpoints must already exist.
    pub fn add_edge(&mut self, vertex1: VertexId, vertex2: VertexId) -> Result<EdgeId> {
        self.check_endpoints(vertex1, vertex2)?;
        let id = EdgeId(next_id(&mut self.next_edge_id)?);
        self.insert_edge(Edge::new(id, vertex1, vertex2))?;
        Ok(id)
    }

    pub fn add_edge_with_id(&mut self, id: EdgeId, vertex1: VertexId, vertex2: VertexId) -> Result<()> {
        self.check_endpoints(vertex1, vertex2)?;
        self.insert_edge(Edge::new(id, vertex1, vertex2))
    }

    fn check_endpoints(&self, vertex1: VertexId, vertex2: VertexId) -> Result<()> {
        for id in [vertex1, vertex2] {
            if !self.vertex_index.contains_key(&id) {
                return Err(Error::VertexNotFound(id));
            }
        }
        Ok(())
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edge_index.contains_key(&edge.id) {
            return Err(Error::DuplicateEdge(edge.id));
        }
        self.next_edge_id = self.next_edge_id.max(edge.id.0 as u64 + 1);
        self.edge_index.insert(edge.id, self.edges.len());

        self.adjacency.entry(edge.vertex1).or_default().push(edge.id);
        if !edge.is_self_loop() {
            self.adjacency.entry(edge.vertex2).or_default().push(edge.id);
        }

        self.edges.push(edge);
        Ok(())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&i| &self.edges[i])
    }

    /// Ids of the edges touching `id`, in insertion order.
    pub fn incident_edges(&self, id: VertexId) -> &[EdgeId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// Attach group metadata. Every member must be a vertex of this graph.
    pub fn set_groups(&mut self, groups: Vec<GroupInfo>) -> Result<()> {
        for group in &groups {
            for &id in &group.vertices {
                if !self.vertex_index.contains_key(&id) {
                    return Err(Error::VertexNotFound(id));
                }
            }
        }
        self.groups = Some(groups);
        Ok(())
    }

    pub fn clear_groups(&mut self) {
        self.groups = None;
    }

    // ========================================================================
    // Subgraphs
    // ========================================================================

    /// Build the subgraph induced by `members`: those vertices (ids kept) and
    /// every edge of `source` whose endpoints are both members.
    ///
    /// Duplicate and self-loop edges among the members are copied as-is.
    pub fn induced_subgraph<G: GraphView + ?Sized>(source: &G, members: &[VertexId]) -> Result<Self> {
        let mut subgraph = Self::new(source.directedness());
        let mut member_set: HashSet<VertexId> = HashSet::with_capacity(members.len());

        for &id in members {
            if !source.contains_vertex(id) {
                return Err(Error::VertexNotFound(id));
            }
            if member_set.insert(id) {
                subgraph.add_vertex_with_id(id)?;
            }
        }

        // Carry names over without a second lookup per member.
        for vertex in source.vertices() {
            if let (Some(name), Some(&i)) = (&vertex.name, subgraph.vertex_index.get(&vertex.id)) {
                subgraph.vertices[i].name = Some(name.clone());
            }
        }

        for edge in source.edges() {
            if member_set.contains(&edge.vertex1) && member_set.contains(&edge.vertex2) {
                subgraph.insert_edge(*edge)?;
            }
        }

        tracing::debug!(
            vertices = subgraph.vertices.len(),
            edges = subgraph.edges.len(),
            "built induced subgraph"
        );

        Ok(subgraph)
    }
}

fn next_id(counter: &mut u64) -> Result<u32> {
    let id = u32::try_from(*counter).map_err(|_| Error::IdSpaceExhausted)?;
    *counter += 1;
    Ok(id)
}

// ============================================================================
// GraphView impl
// ============================================================================

impl GraphView for MemoryGraph {
    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_index.contains_key(&id)
    }

    fn adjacent_vertices(&self, id: VertexId) -> Vec<VertexId> {
        let incident = self.incident_edges(id);
        let mut seen: HashSet<VertexId> = HashSet::with_capacity(incident.len());
        let mut adjacent = Vec::with_capacity(incident.len());
        for edge_id in incident {
            if let Some(other) = self.edge(*edge_id).and_then(|e| e.other_vertex(id)) {
                if seen.insert(other) {
                    adjacent.push(other);
                }
            }
        }
        adjacent
    }

    fn groups(&self) -> Option<&[GroupInfo]> {
        self.groups.as_deref()
    }
}

// ============================================================================
// Tests
// ============================================================================
