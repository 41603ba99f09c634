//! Depth-first traversal: spanning tree plus loop-closing back edges.
//!
//! Semantics follow the recursive formulation: a vertex is stamped with its
//! visit order the moment it is discovered, its discovering edge becomes its
//! predecessor and is tagged `Tree`, and the walk descends immediately. Any
//! untagged edge that leads to an already visited vertex is tagged `Back`.
//! Each edge is tagged at most once, so a back edge seen again from its
//! other end is not counted twice.
//!
//! The walk keeps an explicit frame stack (vertex, next incident slot) so deep
//! skeletons do not grow the native call stack. Incident edges are taken in
//! registration order, which makes repeated runs identical.

use tracing::{debug, warn};

use super::arena::Graph;
use super::types::{EdgeId, EdgeKind, Traversal, TraversalCfg, VertexId};

impl Graph {
    /// Reset DFS state, then walk from the root chosen by `cfg.root`.
    ///
    /// Vertices the walk cannot reach are returned in `Traversal::unreached`
    /// with `visit_order() == None`.
    ///
    /// # Panics
    /// On an empty graph, or if `cfg.root` names a vertex out of range.
    pub fn depth_first_search(&mut self, cfg: TraversalCfg) -> Traversal {
        let root = self.prepare(cfg);
        let mut runner = DfsRunner::new(self);
        runner.walk(root);
        let out = runner.finish();
        if out.is_complete() {
            debug!(
                root = root.0,
                visited = out.order.len(),
                tree = out.tree_edges.len(),
                back = out.back_edges.len(),
                "dfs"
            );
        } else {
            warn!(
                root = root.0,
                visited = out.order.len(),
                unreached = out.unreached.len(),
                "dfs left vertices unreached; graph is disconnected"
            );
        }
        out
    }

    /// Like [`Graph::depth_first_search`], but restarts from the lowest-index
    /// unvisited vertex until every vertex is visited. The visit counter keeps
    /// running across components, so orders cover `0..num_vertices()`.
    ///
    /// # Panics
    /// On an empty graph, or if `cfg.root` names a vertex out of range.
    pub fn depth_first_forest(&mut self, cfg: TraversalCfg) -> Traversal {
        let root = self.prepare(cfg);
        let mut runner = DfsRunner::new(self);
        runner.walk(root);
        for i in 0..runner.g.vertices.len() {
            if !runner.g.vertices[i].is_visited() {
                runner.walk(VertexId(i));
            }
        }
        let out = runner.finish();
        debug!(
            components = out.roots.len(),
            tree = out.tree_edges.len(),
            back = out.back_edges.len(),
            "dfs forest"
        );
        out
    }

    fn prepare(&mut self, cfg: TraversalCfg) -> VertexId {
        assert!(!self.is_empty(), "traversal of an empty graph");
        self.reset_traversal();
        let root = self
            .select_root(cfg.root)
            .unwrap_or_else(|| unreachable!("non-empty graph always has a root"));
        self.root = Some(root);
        root
    }

    /// Edges tagged `Tree` by the last traversal, in id order.
    pub fn tree_edges(&self) -> Vec<EdgeId> {
        self.edges_of_kind(EdgeKind::Tree)
    }

    /// Edges tagged `Back` by the last traversal, in id order.
    pub fn back_edges(&self) -> Vec<EdgeId> {
        self.edges_of_kind(EdgeKind::Back)
    }

    fn edges_of_kind(&self, kind: EdgeKind) -> Vec<EdgeId> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind() == kind)
            .map(|(i, _)| EdgeId(i))
            .collect()
    }
}

/// One pending vertex on the explicit stack.
#[derive(Clone, Copy, Debug)]
struct Frame {
    v: VertexId,
    next: usize,
}

/// DFS runner carrying the graph and accumulators.
struct DfsRunner<'a> {
    g: &'a mut Graph,
    next_order: usize,
    out: Traversal,
    stack: Vec<Frame>,
}

impl<'a> DfsRunner<'a> {
    fn new(g: &'a mut Graph) -> Self {
        Self {
            g,
            next_order: 0,
            out: Traversal::default(),
            stack: Vec::new(),
        }
    }

    fn discover(&mut self, v: VertexId, via: Option<EdgeId>) {
        let vertex = &mut self.g.vertices[v.0];
        vertex.set_visited_with_order(true, self.next_order);
        vertex.set_predecessor(via);
        self.next_order += 1;
        self.out.order.push(v);
        self.stack.push(Frame { v, next: 0 });
    }

    fn walk(&mut self, root: VertexId) {
        self.out.roots.push(root);
        self.discover(root, None);
        while let Some(top) = self.stack.last_mut() {
            let Frame { v, next } = *top;
            let Some(&e) = self.g.vertices[v.0].branches().get(next) else {
                self.stack.pop();
                continue;
            };
            top.next += 1;
            // Tagged edges are done: the arrival edge is `Tree`, and a back
            // edge is seen a second time from its far end.
            if self.g.edges[e.0].kind() != EdgeKind::Undefined {
                continue;
            }
            let w = self.g.edges[e.0].opposite(v);
            if self.g.vertices[w.0].is_visited() {
                self.g.edges[e.0].set_kind(EdgeKind::Back);
                self.out.back_edges.push(e);
            } else {
                self.g.edges[e.0].set_kind(EdgeKind::Tree);
                self.out.tree_edges.push(e);
                self.discover(w, Some(e));
            }
        }
    }

    fn finish(self) -> Traversal {
        let mut out = self.out;
        out.unreached = self
            .g
            .vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.visit_order().is_none())
            .map(|(i, _)| VertexId(i))
            .collect();
        out
    }
}
