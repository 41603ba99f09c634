//! Handles, tags, configuration, and traversal results.
//!
//! Kept small and explicit to make `graph`, `dfs`, and `split` easy to read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier types for clarity (indices into the owning graph's arenas).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

/// DFS classification of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Not reached by the last traversal (or no traversal yet).
    #[default]
    Undefined,
    /// First-discovery edge; part of the spanning tree.
    Tree,
    /// Loop-closing edge; one per independent cycle.
    Back,
}

/// Vertex role derived from its degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKind {
    Isolated,
    EndPoint,
    Slab,
    Junction,
}

impl VertexKind {
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Isolated,
            1 => Self::EndPoint,
            2 => Self::Slab,
            _ => Self::Junction,
        }
    }
}

/// How the traversal root is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RootPolicy {
    /// The graph's stored root (`Graph::set_root`, or the root of the last
    /// traversal); the first vertex when none is stored.
    #[default]
    Designated,
    /// The first vertex in insertion order.
    FirstVertex,
    /// The first vertex with one branch end; falls back to the first vertex.
    FirstEndPoint,
    /// The vertex with the most branch ends; ties go to the lowest id.
    MaxDegree,
    /// An explicit vertex. Out-of-range handles are a caller bug.
    Vertex(VertexId),
}

/// Traversal configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalCfg {
    pub root: RootPolicy,
}

impl TraversalCfg {
    pub fn rooted_at(v: VertexId) -> Self {
        Self {
            root: RootPolicy::Vertex(v),
        }
    }
}

/// Result of one traversal pass.
///
/// `order[k]` is the vertex visited k-th. Vertices left unvisited are listed
/// in `unreached`; a non-empty list means the graph is not connected from the
/// chosen root(s).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    pub roots: Vec<VertexId>,
    pub order: Vec<VertexId>,
    pub tree_edges: Vec<EdgeId>,
    pub back_edges: Vec<EdgeId>,
    pub unreached: Vec<VertexId>,
}

impl Traversal {
    /// Number of independent cycles found (one per back edge).
    #[inline]
    pub fn loop_count(&self) -> usize {
        self.back_edges.len()
    }

    /// Number of components walked (one per root).
    #[inline]
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// True when every vertex was visited.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unreached.is_empty()
    }
}

/// Topology counts read by measurement code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyCounts {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub loops: usize,
    pub isolated: usize,
    pub end_points: usize,
    pub slab_vertices: usize,
    pub junctions: usize,
    pub triple_points: usize,
    pub quadruple_points: usize,
    pub max_degree: usize,
}

/// Errors raised while assembling a graph from caller-supplied handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    UnknownVertex { id: VertexId, len: usize },
    InvalidParams { reason: String },
}

impl GraphError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { id, len } => {
                write!(f, "unknown vertex {} (graph has {len} vertices)", id.0)
            }
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}
