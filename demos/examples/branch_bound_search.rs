// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch-and-bound search over a tiny caller-side octree.
//!
//! The kernel supplies only the geometry; this demo plays the search engine:
//! it buckets points into octree cells with `narrow`, answers a
//! nearest-neighbor query by pruning cells with `dist_to_point` + `bounded`,
//! and combines per-child verdicts with `agreement`.
//!
//! Run:
//! - `cargo run -p canopy_demos --example branch_bound_search`

use canopy_geom::{Box3, Octant, Point3, agreement, bounded};

enum Node {
    Leaf(Vec<Point3>),
    Branch(Box<[Node; 8]>),
}

const LEAF_CAP: usize = 4;

fn build(bounds: Box3, points: Vec<Point3>, depth: usize) -> Node {
    if points.len() <= LEAF_CAP || depth == 0 {
        return Node::Leaf(points);
    }
    let mut buckets: [Vec<Point3>; 8] = Default::default();
    for p in points {
        let (octant, _) = bounds.narrow(p);
        buckets[octant.index()].push(p);
    }
    let mut index = 0;
    let children = buckets.map(|bucket| {
        let child = build(bounds.octant_box(Octant::from_index(index)), bucket, depth - 1);
        index += 1;
        child
    });
    Node::Branch(Box::new(children))
}

/// Nearest stored point to `query`, pruning cells that cannot beat `best`.
fn nearest(node: &Node, bounds: Box3, query: Point3, best: &mut Option<(f64, Point3)>) {
    let radius = best.map_or(f64::INFINITY, |(d, _)| d);
    // Tolerance gate: once the cell's lower bound exceeds the current best,
    // the whole branch is dead.
    if bounded(bounds.dist_to_point(query), radius).is_none() {
        return;
    }
    match node {
        Node::Leaf(points) => {
            for p in points {
                let d = query.distance(*p);
                if best.is_none_or(|(b, _)| d < b) {
                    *best = Some((d, *p));
                }
            }
        }
        Node::Branch(children) => {
            for (i, child) in children.iter().enumerate() {
                nearest(child, bounds.octant_box(Octant::from_index(i)), query, best);
            }
        }
    }
}

/// Tri-state: does every point of `bounds` lie within `radius` of `query`?
///
/// Decides from the cell bounds alone; `None` means the cell straddles the
/// radius and the evidence is inconclusive at this level.
fn cell_within(bounds: Box3, query: Point3, radius: f64) -> Option<bool> {
    if bounds.max_dist_to_point(query) <= radius {
        Some(true)
    } else if bounds.dist_to_point(query) > radius {
        Some(false)
    } else {
        None
    }
}

fn main() {
    let root = Box3::from_corners(Point3::ORIGIN, Point3::new(100.0, 100.0, 100.0));

    // A deterministic scatter of points (low-discrepancy-ish, good enough).
    let mut points = Vec::new();
    for i in 0..200u32 {
        let f = f64::from(i);
        points.push(Point3::new(
            (f * 37.0) % 100.0,
            (f * 61.0) % 100.0,
            (f * 89.0) % 100.0,
        ));
    }

    let tree = build(root, points.clone(), 8);

    let query = Point3::new(33.0, 45.0, 70.0);
    let mut best = None;
    nearest(&tree, root, query, &mut best);
    let (dist, found) = best.expect("tree holds points");

    // Cross-check against the linear scan.
    let brute = points
        .iter()
        .map(|p| query.distance(*p))
        .fold(f64::INFINITY, f64::min);
    assert_eq!(dist, brute, "pruned search must agree with the linear scan");
    println!("nearest to {query:?}: {found:?} at distance {dist:.3}");

    // Combine per-octant verdicts: is the whole cloud within 150 of the
    // query? Every child says yes, so the verdicts agree.
    let verdict = agreement(
        root.octants()
            .map(|cell| cell_within(cell, query, 150.0)),
    );
    assert_eq!(verdict, Some(true));

    // At a tight radius the children disagree (some wholly outside, some
    // not), so no verdict is established.
    let verdict = agreement(root.octants().map(|cell| cell_within(cell, query, 60.0)));
    assert_eq!(verdict, None);
    println!("radius verdicts behave as expected");
}
