//! Components, detached subgraph copies, and loop pruning.
//!
//! Copies never reuse source handles: kept vertices are re-created with
//! `Vertex::clone_unconnected`, an old→new handle map is filled in, and only
//! edges with both endpoints in the map are rebuilt on the clones.

use tracing::debug;

use super::arena::Graph;
use super::types::{EdgeKind, TraversalCfg, VertexId};

impl Graph {
    /// Vertex sets of the connected components, ordered by their lowest id;
    /// ids inside a component are ascending. Does not touch DFS state.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let n = self.vertices.len();
        let mut seen = vec![false; n];
        let mut out = Vec::new();
        let mut stack = Vec::new();
        for s in 0..n {
            if seen[s] {
                continue;
            }
            seen[s] = true;
            stack.push(s);
            let mut comp = Vec::new();
            while let Some(v) = stack.pop() {
                comp.push(VertexId(v));
                for &e in self.vertices[v].branches() {
                    let w = self.edges[e.0].opposite(VertexId(v)).0;
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
            comp.sort_unstable();
            out.push(comp);
        }
        out
    }

    /// Detached copy of the vertices in `keep` and the edges between them.
    ///
    /// Returns the copy and a map from source vertex index to the handle in
    /// the copy (`None` for vertices not kept). Vertices are placed in `keep`
    /// order; repeated handles are kept once. Edge order follows the source.
    ///
    /// # Panics
    /// If a handle in `keep` is out of range.
    pub fn clone_subgraph(&self, keep: &[VertexId]) -> (Graph, Vec<Option<VertexId>>) {
        let mut map: Vec<Option<VertexId>> = vec![None; self.vertices.len()];
        let mut sub = Graph::with_calibration(self.calibration);
        for &v in keep {
            if map[v.0].is_some() {
                continue;
            }
            map[v.0] = Some(VertexId(sub.vertices.len()));
            sub.vertices.push(self.vertices[v.0].clone_unconnected());
        }
        for e in &self.edges {
            let (a, b) = e.endpoints();
            if let (Some(na), Some(nb)) = (map[a.0], map[b.0]) {
                sub.push_edge(na, nb, e.slab().to_vec());
            }
        }
        sub.root = self.root.and_then(|r| map[r.0]);
        (sub, map)
    }

    /// One detached graph per connected component.
    pub fn split_components(&self) -> Vec<Graph> {
        self.connected_components()
            .iter()
            .map(|comp| self.clone_subgraph(comp).0)
            .collect()
    }

    /// Run a forest traversal and return a copy without its back edges.
    ///
    /// The copy keeps every vertex (same handles, since all are kept in order)
    /// and is cycle-free: its edge count is `V - C`.
    pub fn spanning_forest(&mut self, cfg: TraversalCfg) -> Graph {
        let walk = self.depth_first_forest(cfg);
        let mut forest = Graph::with_calibration(self.calibration);
        for v in &self.vertices {
            forest.vertices.push(v.clone_unconnected());
        }
        for e in &self.edges {
            if e.kind() == EdgeKind::Back {
                continue;
            }
            let (a, b) = e.endpoints();
            forest.push_edge(a, b, e.slab().to_vec());
        }
        forest.root = self.root;
        debug!(
            pruned = walk.back_edges.len(),
            kept = forest.edges.len(),
            "spanning forest"
        );
        forest
    }
}
