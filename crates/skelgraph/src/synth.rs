//! Synthetic skeleton graphs (voxel lattices and random multigraphs).
//!
//! Purpose
//! - Provide reproducible inputs with known topology for tests and benches:
//!   a lattice has a closed-form cycle rank, and a random multigraph is built
//!   from a spanning tree plus counted extra edges, so its loop count is known
//!   by construction.
//!
//! Model
//! - Each vertex is a single-voxel cluster; slabs are straight voxel runs.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, GraphError, Vertex, VertexId};
use crate::point::{Calibration, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Box lattice of junctions joined by axis-aligned slabs.
#[derive(Clone, Copy, Debug)]
pub struct LatticeCfg {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Voxel distance between neighbouring junctions; `spacing - 1` slab voxels per edge.
    pub spacing: i32,
    pub calibration: Calibration,
}

impl Default for LatticeCfg {
    fn default() -> Self {
        Self {
            nx: 3,
            ny: 3,
            nz: 1,
            spacing: 4,
            calibration: Calibration::default(),
        }
    }
}

impl LatticeCfg {
    /// Independent cycles of the lattice: `E - V + 1`. Zero for a lattice
    /// with an empty dimension, which `lattice_graph` rejects.
    pub fn expected_loops(&self) -> usize {
        let (x, y, z) = (self.nx, self.ny, self.nz);
        if x == 0 || y == 0 || z == 0 {
            return 0;
        }
        let v = x * y * z;
        let e = (x - 1) * y * z + x * (y - 1) * z + x * y * (z - 1);
        e + 1 - v
    }
}

/// Build the lattice. Vertex `(i, j, k)` gets id `i + nx * (j + ny * k)`;
/// edges are added per vertex in +x, +y, +z order.
pub fn lattice_graph(cfg: LatticeCfg) -> Result<Graph, GraphError> {
    if cfg.nx == 0 || cfg.ny == 0 || cfg.nz == 0 {
        return Err(GraphError::invalid("lattice dimensions must be positive"));
    }
    if cfg.spacing < 1 {
        return Err(GraphError::invalid("lattice spacing must be at least 1"));
    }
    let s = cfg.spacing;
    let mut g = Graph::with_calibration(cfg.calibration);
    let at = |i: usize, j: usize, k: usize| Point::new(i as i32 * s, j as i32 * s, k as i32 * s);
    for k in 0..cfg.nz {
        for j in 0..cfg.ny {
            for i in 0..cfg.nx {
                g.add_vertex(Vertex::from_points([at(i, j, k)]));
            }
        }
    }
    let id = |i: usize, j: usize, k: usize| VertexId(i + cfg.nx * (j + cfg.ny * k));
    let slab = |from: Point, step: (i32, i32, i32)| -> Vec<Point> {
        (1..s)
            .map(|t| Point::new(from.x + step.0 * t, from.y + step.1 * t, from.z + step.2 * t))
            .collect()
    };
    for k in 0..cfg.nz {
        for j in 0..cfg.ny {
            for i in 0..cfg.nx {
                let p = at(i, j, k);
                if i + 1 < cfg.nx {
                    g.add_edge(id(i, j, k), id(i + 1, j, k), slab(p, (1, 0, 0)))?;
                }
                if j + 1 < cfg.ny {
                    g.add_edge(id(i, j, k), id(i, j + 1, k), slab(p, (0, 1, 0)))?;
                }
                if k + 1 < cfg.nz {
                    g.add_edge(id(i, j, k), id(i, j, k + 1), slab(p, (0, 0, 1)))?;
                }
            }
        }
    }
    Ok(g)
}

/// Random connected multigraph configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub vertices: usize,
    /// Edges added on top of the random spanning tree (parallel edges allowed).
    pub extra_edges: usize,
    pub self_loops: usize,
    /// Slab voxels per edge are drawn from `0..=max_slab`.
    pub max_slab: usize,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            vertices: 32,
            extra_edges: 8,
            self_loops: 1,
            max_slab: 6,
        }
    }
}

impl RandomGraphCfg {
    /// Independent cycles by construction (each extra edge and self-loop closes one).
    pub fn expected_loops(&self) -> usize {
        self.extra_edges + self.self_loops
    }
}

/// Draw a connected multigraph: vertex `i > 0` first attaches to a random
/// earlier vertex, then extra edges and self-loops join random vertices.
pub fn draw_skeleton_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> Result<Graph, GraphError> {
    if cfg.vertices == 0 {
        return Err(GraphError::invalid("need at least one vertex"));
    }
    let mut rng = tok.to_std_rng();
    let mut g = Graph::new();
    // Slab points of edges drawn from vertex i stay in x = stride*i + 1 ..
    // stride*i + max_slab, strictly between vertex i and vertex i + 1.
    let stride = (cfg.max_slab as i32 + 2).max(8);
    for i in 0..cfg.vertices {
        let p = Point::new(stride * i as i32, rng.gen_range(0..64), rng.gen_range(0..64));
        g.add_vertex(Vertex::from_points([p]));
    }
    let slab = |rng: &mut StdRng, a: VertexId| -> Vec<Point> {
        let len = rng.gen_range(0..=cfg.max_slab);
        let base = stride * a.0 as i32;
        (0..len)
            .map(|t| Point::new(base + 1 + t as i32, rng.gen_range(0..64), rng.gen_range(0..64)))
            .collect()
    };
    let mut pending = Vec::with_capacity(cfg.vertices + cfg.extra_edges + cfg.self_loops);
    for i in 1..cfg.vertices {
        let j = rng.gen_range(0..i);
        pending.push((VertexId(j), VertexId(i)));
    }
    for _ in 0..cfg.extra_edges {
        let a = rng.gen_range(0..cfg.vertices);
        let mut b = rng.gen_range(0..cfg.vertices);
        if b == a && cfg.vertices > 1 {
            b = (a + 1) % cfg.vertices;
        }
        pending.push((VertexId(a), VertexId(b)));
    }
    for _ in 0..cfg.self_loops {
        let a = VertexId(rng.gen_range(0..cfg.vertices));
        pending.push((a, a));
    }
    for (a, b) in pending {
        let s = slab(&mut rng, a);
        g.add_edge(a, b, s)?;
    }
    Ok(g)
}
