//! Vertex: a cluster of junction/end voxels plus transient DFS state.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::point::{centroid, Point};

use super::types::{EdgeId, VertexKind};

/// Graph node. Owns its member points; refers to incident edges by handle.
///
/// Invariants (caller contract, not checked here):
/// - A point belongs to at most one vertex of a graph.
/// - `set_branch` is called once per incident edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    points: Vec<Point>,
    branches: Vec<EdgeId>,
    visited: bool,
    visit_order: Option<usize>,
    predecessor: Option<EdgeId>,
}

impl Vertex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Membership by value. O(cluster size).
    #[inline]
    pub fn is_vertex_point(&self, p: &Point) -> bool {
        self.points.contains(p)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Space-separated member points in insertion order.
    pub fn points_to_string(&self) -> String {
        self.points
            .iter()
            .map(Point::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Mean member position in voxel space.
    #[inline]
    pub fn centroid(&self) -> Option<Vector3<f64>> {
        centroid(&self.points)
    }

    /// Register an incident edge. No de-duplication.
    #[inline]
    pub fn set_branch(&mut self, e: EdgeId) {
        self.branches.push(e);
    }

    /// Incident edges in registration order.
    #[inline]
    pub fn branches(&self) -> &[EdgeId] {
        &self.branches
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.branches.len()
    }

    /// Role by incident-edge count. A self-loop is registered once and so
    /// counts once here; `Graph::vertex_kind` counts both of its ends.
    #[inline]
    pub fn kind(&self) -> VertexKind {
        VertexKind::from_degree(self.degree())
    }

    #[inline]
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Set the visit flag and stamp the traversal order assigned by the driver.
    #[inline]
    pub fn set_visited_with_order(&mut self, visited: bool, order: usize) {
        self.visited = visited;
        self.visit_order = Some(order);
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// `None` until a traversal reaches this vertex.
    #[inline]
    pub fn visit_order(&self) -> Option<usize> {
        self.visit_order
    }

    /// Tree edge by which this vertex was first discovered; `None` for roots.
    #[inline]
    pub fn predecessor(&self) -> Option<EdgeId> {
        self.predecessor
    }

    #[inline]
    pub fn set_predecessor(&mut self, e: Option<EdgeId>) {
        self.predecessor = e;
    }

    /// Return DFS fields to their initial state. Idempotent.
    #[inline]
    pub fn reset_traversal(&mut self) {
        self.visited = false;
        self.visit_order = None;
        self.predecessor = None;
    }

    /// Drop incidence and predecessor; points and visit state stay.
    pub(crate) fn detach(&mut self) {
        self.branches.clear();
        self.predecessor = None;
    }

    /// Copy points and visit state into a fresh vertex with no branches and no
    /// predecessor, for placement into another graph.
    pub fn clone_unconnected(&self) -> Self {
        Self {
            points: self.points.clone(),
            branches: Vec::new(),
            visited: self.visited,
            visit_order: self.visit_order,
            predecessor: None,
        }
    }
}
