// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree point location.
//!
//! Narrow a root box around a few points and print the octant path each one
//! takes, then check the paths agree with the octant enumeration.
//!
//! Run:
//! - `cargo run -p canopy_demos --example octree_locate`

use canopy_geom::{Box3, Point3};

fn main() {
    let root = Box3::from_corners(Point3::ORIGIN, Point3::new(256.0, 256.0, 256.0));

    let points = [
        Point3::new(10.0, 200.0, 42.0),
        Point3::new(128.0, 128.0, 128.0), // midpoint ties go to the upper halves
        Point3::new(255.9, 0.1, 77.0),
    ];

    for p in points {
        let mut cell = root;
        let mut path = Vec::new();
        for _ in 0..6 {
            let (octant, next) = cell.narrow(p);
            // The narrowed cell is always the one the enumeration lists at
            // the octant's index.
            assert_eq!(cell.octants().nth(octant.index()), Some(next));
            assert!(next.contains_point(p), "narrowing never loses the point");
            path.push(octant.index());
            cell = next;
        }
        println!(
            "{:?} -> octant path {:?}, cell {:?}..{:?}",
            p,
            path,
            cell.min_corner(),
            cell.max_corner()
        );
    }

    // The eight octants tile the root: every sample point lands in exactly
    // one of them under half-open membership.
    for p in points {
        let holders = root.octants().filter(|o| o.contains_point(p)).count();
        assert_eq!(holders, 1);
    }
    println!("all sample points land in exactly one octant");
}
