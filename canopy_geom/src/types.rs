// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry value types: points, axis intervals, and boxes.

/// A point in 3D space.
///
/// A plain value with no identity beyond its coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The origin, `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A span on one axis, from `min` to `max`.
///
/// Well-formed intervals satisfy `min <= max`. The kernel does not check
/// this; behavior on inverted intervals is unspecified.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Create a new interval from its bounds.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the interval.
    #[inline]
    pub fn length(self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn mid(self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Half-open membership: `min <= v < max`.
    ///
    /// A value exactly at `max` is not contained. Octant partitioning relies
    /// on this to keep neighboring cells from claiming the shared face twice.
    #[inline]
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v < self.max
    }

    /// Closed membership: `min <= v <= max`.
    #[inline]
    pub fn contains_closed(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Closed sub-interval test: is all of `other` within `self`?
    #[inline]
    pub fn contains_interval(self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// The smallest interval covering both `self` and `other`.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// The nearest coordinate within the interval.
    #[inline]
    pub fn clamp(self, v: f64) -> f64 {
        if v < self.min {
            self.min
        } else if v < self.max {
            v
        } else {
            self.max
        }
    }

    /// The lower half after midpoint bisection.
    #[inline]
    pub fn low_half(self) -> Self {
        Self::new(self.min, self.mid())
    }

    /// The upper half after midpoint bisection.
    #[inline]
    pub fn high_half(self) -> Self {
        Self::new(self.mid(), self.max)
    }
}

/// An axis-aligned box in 3D: one [`Interval`] per axis.
///
/// Point membership is half-open on every axis ([`Box3::contains_point`]),
/// while containment, union, and the distance bounds treat the box as
/// closed. The two conventions are deliberate and must stay distinct:
/// half-open membership makes octant partitioning exhaustive and
/// non-overlapping, and closed intervals give the usual geometric bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Box3 {
    /// Extent along the x axis.
    pub x: Interval,
    /// Extent along the y axis.
    pub y: Interval,
    /// Extent along the z axis.
    pub z: Interval,
}

impl Box3 {
    /// Create a box from its three axis intervals.
    #[inline]
    pub const fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Create a box from its minimum and maximum corners.
    #[inline]
    pub const fn from_corners(min: Point3, max: Point3) -> Self {
        Self::new(
            Interval::new(min.x, max.x),
            Interval::new(min.y, max.y),
            Interval::new(min.z, max.z),
        )
    }

    /// Create a box from its center and per-axis half extents.
    #[inline]
    pub fn from_center_half_extents(center: Point3, half_extents: Point3) -> Self {
        Self::new(
            Interval::new(center.x - half_extents.x, center.x + half_extents.x),
            Interval::new(center.y - half_extents.y, center.y + half_extents.y),
            Interval::new(center.z - half_extents.z, center.z + half_extents.z),
        )
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub const fn min_corner(&self) -> Point3 {
        Point3::new(self.x.min, self.y.min, self.z.min)
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub const fn max_corner(&self) -> Point3 {
        Point3::new(self.x.max, self.y.max, self.z.max)
    }

    /// The center of the box.
    #[inline]
    pub fn center(&self) -> Point3 {
        Point3::new(self.x.mid(), self.y.mid(), self.z.mid())
    }

    /// Per-axis lengths of the box.
    #[inline]
    pub fn extents(&self) -> Point3 {
        Point3::new(self.x.length(), self.y.length(), self.z.length())
    }

    /// Whether the box contains the point, half-open on every axis.
    ///
    /// A point exactly on a maximum face is not contained.
    #[inline]
    pub fn contains_point(&self, p: Point3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Whether all of `other` lies within `self`, closed on every axis.
    ///
    /// Unlike [`Box3::contains_point`], a box sharing a face with its
    /// container is still contained.
    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.x.contains_interval(other.x)
            && self.y.contains_interval(other.y)
            && self.z.contains_interval(other.z)
    }

    /// Whether the two boxes share no volume.
    ///
    /// Separating-axis test: true iff some axis has `max1 <= min2` or
    /// `max2 <= min1`. Boxes touching along a face or edge are disjoint by
    /// this definition even though their closed intersection is a degenerate
    /// box.
    #[inline]
    pub fn disjoint(&self, other: &Self) -> bool {
        fn apart(a: Interval, b: Interval) -> bool {
            a.max <= b.min || b.max <= a.min
        }
        apart(self.x, other.x) || apart(self.y, other.y) || apart(self.z, other.z)
    }

    /// The smallest box enclosing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.x.union(other.x),
            self.y.union(other.y),
            self.z.union(other.z),
        )
    }

    /// The intersection of the two boxes.
    ///
    /// May be inverted when the boxes do not overlap; pair with
    /// [`Box3::is_empty`].
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            Interval::new(self.x.min.max(other.x.min), self.x.max.min(other.x.max)),
            Interval::new(self.y.min.max(other.y.min), self.y.max.min(other.y.max)),
            Interval::new(self.z.min.max(other.z.min), self.z.max.min(other.z.max)),
        )
    }

    /// Return true if the box is inverted (no volume) on some axis. Assumes no NaN.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.max < self.x.min || self.y.max < self.y.min || self.z.max < self.z.min
    }

    /// Grow the box so it also covers `p`.
    #[inline]
    pub fn take_point(&mut self, p: Point3) {
        self.x = Interval::new(self.x.min.min(p.x), self.x.max.max(p.x));
        self.y = Interval::new(self.y.min.min(p.y), self.y.max.max(p.y));
        self.z = Interval::new(self.z.min.min(p.z), self.z.max.max(p.z));
    }
}

#[cfg(feature = "glam")]
impl From<glam::DVec3> for Point3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<Point3> for glam::DVec3 {
    #[inline]
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
