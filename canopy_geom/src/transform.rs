// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conservative bounds for boxes pushed through point maps.

use crate::octant::Octant;
use crate::types::{Box3, Point3};

/// A row-major 3×3 matrix acting on points by matrix-vector product.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat3 {
    /// The three rows of the matrix.
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity map.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Create a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Apply the matrix to a point: each output coordinate is the dot
    /// product of the matching row with `p`.
    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        let [r0, r1, r2] = self.rows;
        Point3::new(
            r0[0] * p.x + r0[1] * p.y + r0[2] * p.z,
            r1[0] * p.x + r1[1] * p.y + r1[2] * p.z,
            r2[0] * p.x + r2[1] * p.y + r2[2] * p.z,
        )
    }
}

impl Box3 {
    /// Axis-aligned bounds of `f` applied to the box's eight corners.
    ///
    /// Correct only when extrema of `f` over the box occur at its corners:
    /// affine maps, rotations, and other convex-extremal maps qualify. The
    /// kernel cannot check this precondition; an unsuitable `f` yields a
    /// bound that is silently too tight.
    pub fn image_bounds(&self, mut f: impl FnMut(Point3) -> Point3) -> Self {
        let seed = f(self.vertex(Octant::empty()));
        let mut bounds = Self::from_corners(seed, seed);
        // The first vertex in canonical order is the all-min corner, which
        // seeded the fold above.
        for v in self.vertices().skip(1) {
            bounds.take_point(f(v));
        }
        bounds
    }
}

#[cfg(feature = "glam")]
impl From<glam::DMat3> for Mat3 {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        // glam stores columns; transpose to read rows.
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

#[cfg(feature = "glam")]
impl From<Mat3> for glam::DMat3 {
    #[inline]
    fn from(m: Mat3) -> Self {
        Self::from_cols_array_2d(&m.rows).transpose()
    }
}
