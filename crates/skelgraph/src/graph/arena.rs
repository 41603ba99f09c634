//! Graph arenas, construction, and read access.

use serde::{Deserialize, Serialize};

use crate::point::{Calibration, Point};

use super::edge::Edge;
use super::types::{
    EdgeId, EdgeKind, GraphError, RootPolicy, TopologyCounts, VertexId, VertexKind,
};
use super::vertex::Vertex;

/// Skeleton multigraph. Sole owner of its vertices and edges.
///
/// Lifecycle: vertices are added with their complete point clusters, then
/// edges are added between them; afterwards the topology is frozen and only
/// the DFS fields change. Self-loops and parallel edges are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) root: Option<VertexId>,
    pub(crate) calibration: Calibration,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self {
            calibration,
            ..Self::default()
        }
    }

    #[inline]
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Change voxel spacing and recompute every edge length.
    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.calibration = calibration;
        self.remeasure();
    }

    /// Take ownership of `v`. Any branches and predecessor it carries are
    /// dropped; incidence is established by `add_edge` only.
    pub fn add_vertex(&mut self, mut v: Vertex) -> VertexId {
        let id = VertexId(self.vertices.len());
        v.detach();
        self.vertices.push(v);
        id
    }

    /// Create the edge `a`–`b` through `slab`, measure it, and register it on
    /// both endpoints (once for a self-loop).
    pub fn add_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        slab: Vec<Point>,
    ) -> Result<EdgeId, GraphError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.push_edge(a, b, slab))
    }

    /// `add_edge` for handles already known to be in range.
    pub(crate) fn push_edge(&mut self, a: VertexId, b: VertexId, slab: Vec<Point>) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let mut e = Edge::new(a, b, slab);
        e.measure(
            self.vertices[a.0].centroid(),
            self.vertices[b.0].centroid(),
            &self.calibration,
        );
        self.edges.push(e);
        self.vertices[a.0].set_branch(id);
        if b != a {
            self.vertices[b.0].set_branch(id);
        }
        id
    }

    fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        if id.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                id,
                len: self.vertices.len(),
            })
        }
    }

    /// Recompute all edge lengths from the current clusters and calibration.
    pub fn remeasure(&mut self) {
        let cal = self.calibration;
        for e in &mut self.edges {
            let (a, b) = e.endpoints();
            e.measure(
                self.vertices[a.0].centroid(),
                self.vertices[b.0].centroid(),
                &cal,
            );
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    /// Grow the cluster of `id` by `p` and re-measure its incident edges.
    ///
    /// # Panics
    /// If `id` is not a vertex of this graph.
    pub fn add_point(&mut self, id: VertexId, p: Point) {
        self.vertices[id.0].add_point(p);
        let cal = self.calibration;
        for &e in self.vertices[id.0].branches() {
            let (a, b) = self.edges[e.0].endpoints();
            let (ca, cb) = (self.vertices[a.0].centroid(), self.vertices[b.0].centroid());
            self.edges[e.0].measure(ca, cb, &cal);
        }
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    #[inline]
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices[id.0].degree()
    }

    /// Branch ends at `id`: incident edges, with a self-loop counted twice
    /// since both of its ends meet the cluster.
    pub fn branch_ends(&self, id: VertexId) -> usize {
        self.vertices[id.0]
            .branches()
            .iter()
            .map(|&e| if self.edges[e.0].is_self_loop() { 2 } else { 1 })
            .sum()
    }

    /// Role of `id` by its branch ends (see [`Graph::branch_ends`]).
    #[inline]
    pub fn vertex_kind(&self, id: VertexId) -> VertexKind {
        VertexKind::from_degree(self.branch_ends(id))
    }

    /// Vertex whose cluster contains `p`. Linear in the number of points.
    pub fn find_vertex(&self, p: &Point) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.is_vertex_point(p))
            .map(VertexId)
    }

    #[inline]
    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    /// # Panics
    /// If `root` is not a vertex of this graph.
    pub fn set_root(&mut self, root: VertexId) {
        self.check_root(root);
        self.root = Some(root);
    }

    fn check_root(&self, root: VertexId) {
        assert!(
            root.0 < self.vertices.len(),
            "root {} out of range ({} vertices)",
            root.0,
            self.vertices.len()
        );
    }

    /// Resolve `policy` to a vertex; `None` only for an empty graph.
    ///
    /// # Panics
    /// If `policy` names a vertex that is out of range.
    pub fn select_root(&self, policy: RootPolicy) -> Option<VertexId> {
        if self.vertices.is_empty() {
            return None;
        }
        let id = match policy {
            RootPolicy::Designated => {
                let id = self.root.unwrap_or(VertexId(0));
                self.check_root(id);
                id
            }
            RootPolicy::FirstVertex => VertexId(0),
            RootPolicy::FirstEndPoint => self
                .vertex_ids()
                .find(|&v| self.vertex_kind(v) == VertexKind::EndPoint)
                .unwrap_or(VertexId(0)),
            RootPolicy::MaxDegree => {
                let mut best = VertexId(0);
                for v in self.vertex_ids() {
                    if self.branch_ends(v) > self.branch_ends(best) {
                        best = v;
                    }
                }
                best
            }
            RootPolicy::Vertex(id) => {
                self.check_root(id);
                id
            }
        };
        Some(id)
    }

    /// Return all DFS fields and edge tags to their initial state.
    pub fn reset_traversal(&mut self) {
        for v in &mut self.vertices {
            v.reset_traversal();
        }
        for e in &mut self.edges {
            e.set_kind(EdgeKind::Undefined);
        }
    }

    /// Vertex-kind histogram plus component/loop counts from the cycle rank.
    ///
    /// Kinds and `max_degree` use branch ends, so a self-loop adds two.
    pub fn counts(&self) -> TopologyCounts {
        let mut c = TopologyCounts {
            vertices: self.vertices.len(),
            edges: self.edges.len(),
            components: self.connected_components().len(),
            ..TopologyCounts::default()
        };
        c.loops = c.edges + c.components - c.vertices;
        for v in self.vertex_ids() {
            let d = self.branch_ends(v);
            c.max_degree = c.max_degree.max(d);
            match VertexKind::from_degree(d) {
                VertexKind::Isolated => c.isolated += 1,
                VertexKind::EndPoint => c.end_points += 1,
                VertexKind::Slab => c.slab_vertices += 1,
                VertexKind::Junction => {
                    c.junctions += 1;
                    match d {
                        3 => c.triple_points += 1,
                        4 => c.quadruple_points += 1,
                        _ => {}
                    }
                }
            }
        }
        c
    }
}
