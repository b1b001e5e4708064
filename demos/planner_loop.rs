//! Minimal RRT-style growth loop over a 2-D real-vector space.
//!
//! Shows the intended call pattern: configure once, `setup()`, then run the
//! sample / nearest / bounded-step / interpolate loop planners live in.
//!
//! ```sh
//! cargo run --example planner_loop --features std
//! ```

use rvspace::{RealVectorStateSpace, StateSampler, StateSpace};

fn main() {
    // Configuration phase: a 10 x 10 workspace.
    let mut space = RealVectorStateSpace::new(0);
    space.add_named_dimension("x", 0.0, 10.0);
    space.add_named_dimension("y", 0.0, 10.0);
    space.setup();

    let mut settings = String::new();
    space.print_settings(&mut settings).unwrap();
    print!("{settings}");

    // Active phase: grow a tree from the corner toward random samples.
    let mut sampler = space.seeded_sampler(2024);
    let step = 0.05 * space.maximum_extent();

    let mut tree: Vec<rvspace::RealVectorState> = Vec::new();
    let root = space.alloc_state(); // (0, 0)
    tree.push(root);

    let mut sample = space.alloc_state();
    for _ in 0..200 {
        sampler.sample_uniform(&mut sample);

        // Nearest node in the tree under the space's metric.
        let (nearest_idx, d) = tree
            .iter()
            .enumerate()
            .map(|(i, s)| (i, space.distance(s, &sample)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();

        // Bounded extension toward the sample.
        let t = (step / d).min(1.0);
        let mut next = space.alloc_state();
        space.interpolate(&tree[nearest_idx], &sample, t, &mut next);
        debug_assert!(space.satisfies_bounds(&next));
        tree.push(next);
    }

    let goal = {
        let mut g = space.alloc_state();
        g[0] = 9.0;
        g[1] = 9.0;
        g
    };
    let best = tree
        .iter()
        .map(|s| space.distance(s, &goal))
        .fold(f64::INFINITY, f64::min);
    println!("grew {} nodes; closest approach to goal: {best:.3}", tree.len());

    let mut text = String::new();
    space.print_state(tree.last().unwrap(), &mut text).unwrap();
    print!("last node: {text}");

    space.free_state(goal);
    space.free_state(sample);
    for s in tree {
        space.free_state(s);
    }
}
