//! Skeleton topology graph and depth-first classification.
//!
//! Purpose
//! - Model a skeletonized 3D image as a multigraph: vertices are clusters of
//!   junction/end voxels, edges are the voxel chains ("slabs") between them.
//! - Run a deterministic depth-first search that yields a spanning tree and
//!   the loop-closing back edges, one per independent cycle.
//!
//! Layout
//! - `point`: integer voxel coordinates, calibration, centroids.
//! - `graph`: vertex/edge arenas, construction, DFS, cloning and splitting.
//! - `synth`: reproducible synthetic skeleton graphs for tests and benches.
//!
//! Conventions
//! - Vertices and edges live in arenas owned by [`graph::Graph`] and refer to
//!   each other through `VertexId`/`EdgeId` handles (plain indices).
//! - Incident edges are kept in registration order; traversal is stable.
//! - Edge length includes the endpoint cluster centroids, see
//!   [`graph::Edge::length`].

pub mod graph;
pub mod point;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{
    Edge, EdgeId, EdgeKind, Graph, GraphError, RootPolicy, TopologyCounts, Traversal,
    TraversalCfg, Vertex, VertexId, VertexKind,
};
pub use point::{Calibration, Point};

/// Common exports for callers that build and walk skeleton graphs.
pub mod prelude {
    pub use crate::graph::{
        Edge, EdgeId, EdgeKind, Graph, RootPolicy, Traversal, TraversalCfg, Vertex, VertexId,
        VertexKind,
    };
    pub use crate::point::{centroid, Calibration, Point};
    pub use nalgebra::Vector3 as Vec3;
}
