//! Skeleton graph: vertex/edge arenas and depth-first classification.
//!
//! Purpose
//! - Hold the voxel clusters (vertices) and slabs (edges) produced by an
//!   upstream skeleton classifier, and walk them depth-first to split the
//!   edges into a spanning tree and loop-closing back edges.
//!
//! Why this design
//! - Vertices and edges reference each other through `VertexId`/`EdgeId`
//!   handles into arenas owned by `Graph`; there are no ownership cycles.
//! - DFS state lives on the vertex and is reset before every pass. Parallel
//!   passes run on cloned graphs (`Graph` is plain data and `Clone`).
//! - Counting back edges gives the cycle rank `E - (V - C)` directly.
//!
//! Layout
//! - `types.rs` (handles, tags, config, results), `vertex.rs`, `edge.rs`,
//!   `arena.rs` (construction and access), `dfs.rs` (traversal), and
//!   `split.rs` (components, subgraph copies, loop pruning).

mod arena;
mod dfs;
mod edge;
mod split;
mod types;
mod vertex;

pub use arena::Graph;
pub use edge::Edge;
pub use types::{
    EdgeId, EdgeKind, GraphError, RootPolicy, TopologyCounts, Traversal, TraversalCfg, VertexId,
    VertexKind,
};
pub use vertex::Vertex;
