//! Edge: a slab of voxels joining two vertex clusters.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::point::{polyline_length, Calibration, Point};

use super::types::{EdgeKind, VertexId};

/// Undirected edge between `a` and `b` (equal for a self-loop).
///
/// `slab` holds the ordered intermediate voxels, excluding both endpoint
/// clusters. Construction does not register the edge with its endpoints;
/// `Graph::add_edge` does that once the edge is complete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
    slab: Vec<Point>,
    kind: EdgeKind,
    length: f64,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId, slab: Vec<Point>) -> Self {
        Self {
            a,
            b,
            slab,
            kind: EdgeKind::Undefined,
            length: 0.0,
        }
    }

    #[inline]
    pub fn v1(&self) -> VertexId {
        self.a
    }

    #[inline]
    pub fn v2(&self) -> VertexId {
        self.b
    }

    #[inline]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    #[inline]
    pub fn slab(&self) -> &[Point] {
        &self.slab
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// The endpoint other than `v`; `v` itself for a self-loop.
    ///
    /// # Panics
    /// If `v` is not an endpoint of this edge. Membership is guaranteed by
    /// graph construction, so a miss is a caller bug.
    #[inline]
    pub fn opposite(&self, v: VertexId) -> VertexId {
        if v == self.a {
            self.b
        } else {
            assert!(
                v == self.b,
                "vertex {} is not an endpoint of edge ({}, {})",
                v.0,
                self.a.0,
                self.b.0
            );
            self.a
        }
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[inline]
    pub(crate) fn set_kind(&mut self, kind: EdgeKind) {
        self.kind = kind;
    }

    /// Calibrated length along `[centroid(a), slab.., centroid(b)]`.
    ///
    /// Set by `Graph::add_edge`/`Graph::remeasure`; zero for a detached edge.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Calibrated length through the slab voxels only.
    pub fn slab_length(&self, cal: &Calibration) -> f64 {
        let path: Vec<Vector3<f64>> = self.slab.iter().map(|p| p.to_vector()).collect();
        polyline_length(&path, cal)
    }

    /// Recompute `length` from the endpoint centroids. A missing centroid
    /// (empty cluster) contributes no segment.
    pub(crate) fn measure(
        &mut self,
        centroid_a: Option<Vector3<f64>>,
        centroid_b: Option<Vector3<f64>>,
        cal: &Calibration,
    ) {
        let mut path = Vec::with_capacity(self.slab.len() + 2);
        path.extend(centroid_a);
        path.extend(self.slab.iter().map(|p| p.to_vector()));
        path.extend(centroid_b);
        self.length = polyline_length(&path, cal);
    }
}
