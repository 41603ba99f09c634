//! Loop census for a synthetic skeleton.
//!
//! Purpose
//! - Show the intended call sequence for downstream measurement code: build
//!   the graph, traverse it, read loop/branch counts, prune loops.
//!
//! Traversal events from the library print at debug level.

use std::time::Instant;

use anyhow::{Context, Result};
use skelgraph::prelude::*;
use skelgraph::synth::{draw_skeleton_graph, lattice_graph, LatticeCfg, RandomGraphCfg, ReplayToken};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = LatticeCfg {
        nx: 4,
        ny: 3,
        nz: 2,
        calibration: Calibration::isotropic(0.25),
        ..LatticeCfg::default()
    };
    let mut lattice = lattice_graph(cfg).context("building lattice")?;
    report("lattice", &mut lattice, TraversalCfg::default());
    println!("lattice expected_loops={}", cfg.expected_loops());

    let rcfg = RandomGraphCfg::default();
    let mut random = draw_skeleton_graph(rcfg, ReplayToken::new(2024, 0)).context("drawing graph")?;
    report(
        "random",
        &mut random,
        TraversalCfg {
            root: RootPolicy::MaxDegree,
        },
    );
    println!("random expected_loops={}", rcfg.expected_loops());

    let forest = random.spanning_forest(TraversalCfg::default());
    let counts = forest.counts();
    println!(
        "pruned: edges={} loops={} components={}",
        counts.edges, counts.loops, counts.components
    );
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

fn report(name: &str, g: &mut Graph, cfg: TraversalCfg) {
    let start = Instant::now();
    let t = g.depth_first_search(cfg);
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    let total: f64 = t.tree_edges.iter().map(|&e| g.edge(e).length()).sum();
    let c = g.counts();
    println!(
        "{name}: vertices={} edges={} loops={} junctions={} end_points={} tree_length={total:.3} dfs_ms={elapsed:.3}",
        c.vertices,
        c.edges,
        t.loop_count(),
        c.junctions,
        c.end_points,
    );
}
