// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar float helpers shared by `std` and `libm` builds.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("canopy_geom requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    libm::fabs(x)
}
