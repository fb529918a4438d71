// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_geom --heading-base-level=0

//! Canopy Geom: a pure 3D AABB geometry kernel for octree spatial search.
//!
//! Canopy Geom is the geometric substrate for octree-style indexing and
//! nearest/farthest-point query engines.
//!
//! - Containment, disjointness, and union over axis-aligned boxes.
//! - Octant subdivision: corner enumeration, the eight sub-boxes, and
//!   recursive point narrowing.
//! - Distance bounds between points and boxes, including the box-to-box
//!   min/max/min-max bounds that drive branch-and-bound pruning.
//! - Conservative bounds for boxes pushed through affine-like point maps.
//! - Tri-state verdict helpers for combining pruning evidence.
//!
//! It holds no state and performs no allocation: every operation is a
//! deterministic, closed-form computation over plain values, safe to call
//! from any number of threads without synchronization.
//!
//! ## Where this fits
//!
//! Tree construction and traversal, point storage, and query scheduling
//! belong to the layer above; this crate supplies only the primitives those
//! layers agree on. A search engine drives [`Box3::narrow`] to descend,
//! compares [`Box3::dist_to_point`]-style bounds against its current best,
//! and uses [`bounded`]/[`agreement`] to decide when a whole branch can be
//! discarded. The workspace's `demos` member shows both loops end to end.
//!
//! ## Boundary conventions
//!
//! Point membership is half-open on every axis: a point exactly on a box's
//! maximum face is *not* inside. Box containment, union, and the distance
//! bounds treat boxes as closed. Both conventions are load-bearing — the
//! half-open rule is what makes the eight octants of a subdivided box a
//! partition, so the two must not be unified.
//!
//! ## API overview
//!
//! - [`Point3`], [`Interval`], [`Box3`]: the value types.
//! - [`Octant`]: which of the eight children of a subdivided box; doubles as
//!   a corner selector.
//! - [`Box3::vertices`] / [`Box3::octants`]: restartable iterators in one
//!   canonical order (x slowest, z fastest, low before high).
//! - [`Box3::narrow`]: one step of octree descent.
//! - [`Box3::nearest_point`], [`Box3::farthest_point`], and the
//!   point-to-box / box-to-box distance bounds.
//! - [`Box3::image_bounds`] and [`Mat3`]: conservative bound propagation
//!   through point maps.
//! - [`bounded`] and [`agreement`]: tri-state pruning helpers.
//!
//! ## Minimal usage
//!
//! ```
//! use canopy_geom::{Box3, Interval, Point3};
//!
//! let root = Box3::new(
//!     Interval::new(0.0, 10.0),
//!     Interval::new(0.0, 10.0),
//!     Interval::new(0.0, 10.0),
//! );
//! let p = Point3::new(2.0, 7.0, 1.0);
//! assert!(root.contains_point(p));
//!
//! // One octree descent step: which child holds `p`, and its bounds.
//! let (octant, child) = root.narrow(p);
//! assert_eq!(octant.index(), 2);
//! assert!(child.contains_point(p));
//! ```
//!
//! ## Pruning with distance bounds
//!
//! ```
//! use canopy_geom::{bounded, Box3, Point3};
//!
//! let cube = Box3::from_corners(Point3::ORIGIN, Point3::new(10.0, 10.0, 10.0));
//! let query = Point3::new(12.0, 5.0, 5.0);
//! assert_eq!(cube.dist_to_point(query), 2.0);
//!
//! // With a best candidate at distance 1.5, the cube cannot compete.
//! assert_eq!(bounded(cube.dist_to_point(query), 1.5), None);
//! // At 3.0 it still might, so the search keeps it.
//! assert_eq!(bounded(cube.dist_to_point(query), 3.0), Some(2.0));
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are `f64` and assumed finite (no NaNs). Boxes are assumed
//! well-formed (`min <= max` per axis); the kernel does not detect or defend
//! against inverted boxes. There is no failure state: the `Option` returns
//! of [`bounded`] and [`agreement`] mean "undetermined", not error.
//!
//! This crate is `no_std` and allocation-free. Builds need exactly one of
//! the `std` (default) or `libm` features for `sqrt`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod dist;
mod float;
mod octant;
mod transform;
mod types;
mod verdict;

pub use octant::{Octant, Octants, Vertices};
pub use transform::Mat3;
pub use types::{Box3, Interval, Point3};
pub use verdict::{agreement, bounded};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_agrees_with_octant_enumeration() {
        let root = Box3::from_corners(Point3::ORIGIN, Point3::new(16.0, 16.0, 16.0));
        let p = Point3::new(11.0, 3.0, 8.0);
        let (octant, sub) = root.narrow(p);
        assert_eq!(octant, Octant::HIGH_X | Octant::HIGH_Z);
        assert_eq!(root.octants().nth(octant.index()), Some(sub));
        assert!(sub.contains_point(p));
    }

    #[test]
    fn bounds_compose_for_pruning() {
        let near = Box3::from_corners(Point3::ORIGIN, Point3::new(1.0, 1.0, 1.0));
        let far = Box3::from_corners(Point3::new(8.0, 0.0, 0.0), Point3::new(9.0, 1.0, 1.0));
        let query = Point3::new(-1.0, 0.5, 0.5);

        // Any point of `near` is closer than any point of `far`.
        assert!(near.max_dist_to_point(query) < far.dist_to_point(query));

        // So a per-child "is it worth visiting?" sweep agrees.
        let radius = near.max_dist_to_point(query);
        let verdicts = [near, far]
            .into_iter()
            .map(|b| Some(b.dist_to_point(query) <= radius));
        assert_eq!(agreement(verdicts), None, "children disagree, no verdict");
    }
}
