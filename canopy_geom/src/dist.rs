// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Euclidean distances between points and boxes, and the box-to-box bounds
//! used for branch-and-bound pruning.
//!
//! All functions are closed-form: each decomposes into an independent
//! per-axis quantity and combines the three via the Euclidean norm. They are
//! total over well-formed boxes (`min <= max` per axis); inverted boxes are
//! out of contract.

use crate::float;
use crate::types::{Box3, Interval, Point3};

impl Point3 {
    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        float::sqrt(dx * dx + dy * dy + dz * dz)
    }
}

impl Interval {
    /// The bound farther from `v`; equidistant ties resolve to `min`.
    #[inline]
    fn farthest_bound(self, v: f64) -> f64 {
        if 2.0 * v >= self.min + self.max {
            self.min
        } else {
            self.max
        }
    }

    /// Separation between the two intervals, zero when they overlap.
    #[inline]
    fn gap(self, other: Self) -> f64 {
        if self.max < other.min {
            other.min - self.max
        } else if other.max < self.min {
            self.min - other.max
        } else {
            0.0
        }
    }

    /// The larger cross-difference: how far apart two coordinates drawn from
    /// the intervals can be.
    #[inline]
    fn spread(self, other: Self) -> f64 {
        (other.max - self.min).max(self.max - other.min)
    }

    /// Worst-case displacement from the better of this interval's bounds to
    /// anywhere in `other`.
    ///
    /// Evaluated only at this interval's two bounds, so the result is an
    /// upper bound on the true min-max displacement; that keeps it a safe
    /// pruning radius.
    #[inline]
    fn minmax_reach(self, other: Self) -> f64 {
        let worst = |m: f64| float::abs(other.min - m).max(float::abs(other.max - m));
        worst(self.min).min(worst(self.max))
    }
}

impl Box3 {
    /// The point of the box nearest to `p` (which is `p` itself when `p` is
    /// inside), by clamping each coordinate into the axis interval.
    #[inline]
    pub fn nearest_point(&self, p: Point3) -> Point3 {
        Point3::new(self.x.clamp(p.x), self.y.clamp(p.y), self.z.clamp(p.z))
    }

    /// The corner of the box farthest from `p`.
    ///
    /// Per axis this is whichever bound lies farther from the coordinate;
    /// equidistant ties resolve to the `min` bound.
    #[inline]
    pub fn farthest_point(&self, p: Point3) -> Point3 {
        Point3::new(
            self.x.farthest_bound(p.x),
            self.y.farthest_bound(p.y),
            self.z.farthest_bound(p.z),
        )
    }

    /// Minimum distance from `p` to any point of the box; zero when `p` is
    /// inside or on the boundary.
    #[inline]
    pub fn dist_to_point(&self, p: Point3) -> f64 {
        p.distance(self.nearest_point(p))
    }

    /// Maximum distance from `p` to any point of the box.
    #[inline]
    pub fn max_dist_to_point(&self, p: Point3) -> f64 {
        p.distance(self.farthest_point(p))
    }

    /// Minimum distance between any point of `self` and any point of
    /// `other`; zero when the boxes overlap.
    #[inline]
    pub fn min_dist(&self, other: &Self) -> f64 {
        let x = self.x.gap(other.x);
        let y = self.y.gap(other.y);
        let z = self.z.gap(other.z);
        float::sqrt(x * x + y * y + z * z)
    }

    /// Maximum distance between any point of `self` and any point of
    /// `other`.
    #[inline]
    pub fn max_dist(&self, other: &Self) -> f64 {
        let x = self.x.spread(other.x);
        let y = self.y.spread(other.y);
        let z = self.z.spread(other.z);
        float::sqrt(x * x + y * y + z * z)
    }

    /// A radius within which some point of `self` sees all of `other`.
    ///
    /// For a point `q` in `self`, the farthest point of `other` lies at some
    /// distance `worst(q)`; this bounds the minimum of `worst` over `self`,
    /// evaluating each axis at `self`'s two bounds. Farthest-neighbor search
    /// uses it to discard any box whose best case cannot beat the current
    /// candidate. Not symmetric in its arguments.
    #[inline]
    pub fn minmax_dist(&self, other: &Self) -> f64 {
        let x = self.x.minmax_reach(other.x);
        let y = self.y.minmax_reach(other.y);
        let z = self.z.minmax_reach(other.z);
        float::sqrt(x * x + y * y + z * z)
    }
}
