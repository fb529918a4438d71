// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_geom::{Box3, Interval, Mat3, Point3};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(rng: &mut Rng, count: usize, extent: f64) -> Vec<Point3> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Point3::new(
            rng.next_f64() * extent,
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        ));
    }
    out
}

fn gen_boxes(rng: &mut Rng, count: usize, extent: f64, max_size: f64) -> Vec<Box3> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let min = Point3::new(
            rng.next_f64() * extent,
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        );
        let size = Point3::new(
            rng.next_f64() * max_size,
            rng.next_f64() * max_size,
            rng.next_f64() * max_size,
        );
        out.push(Box3::from_corners(
            min,
            Point3::new(min.x + size.x, min.y + size.y, min.z + size.z),
        ));
    }
    out
}

fn bench_point_box_distances(c: &mut Criterion) {
    let mut rng = Rng::new(0x5eed_1234);
    let boxes = gen_boxes(&mut rng, 1024, 1000.0, 50.0);
    let points = gen_points(&mut rng, 1024, 1000.0);

    let mut group = c.benchmark_group("point_box");
    group.throughput(Throughput::Elements((boxes.len() * points.len()) as u64));

    group.bench_function("dist_to_point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for bx in &boxes {
                for p in &points {
                    acc += bx.dist_to_point(*p);
                }
            }
            black_box(acc)
        });
    });

    group.bench_function("max_dist_to_point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for bx in &boxes {
                for p in &points {
                    acc += bx.max_dist_to_point(*p);
                }
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_box_box_bounds(c: &mut Criterion) {
    let mut rng = Rng::new(0xabcd_ef01);
    let left = gen_boxes(&mut rng, 1024, 1000.0, 50.0);
    let right = gen_boxes(&mut rng, 1024, 1000.0, 50.0);

    let mut group = c.benchmark_group("box_box");
    group.throughput(Throughput::Elements(left.len() as u64));

    group.bench_function("min_dist", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for (a, z) in left.iter().zip(&right) {
                acc += a.min_dist(z);
            }
            black_box(acc)
        });
    });

    group.bench_function("max_dist", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for (a, z) in left.iter().zip(&right) {
                acc += a.max_dist(z);
            }
            black_box(acc)
        });
    });

    group.bench_function("minmax_dist", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for (a, z) in left.iter().zip(&right) {
                acc += a.minmax_dist(z);
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_narrow_descent(c: &mut Criterion) {
    let mut rng = Rng::new(0x0c7a_9e55);
    let root = Box3::new(
        Interval::new(0.0, 1024.0),
        Interval::new(0.0, 1024.0),
        Interval::new(0.0, 1024.0),
    );
    let points = gen_points(&mut rng, 1024, 1024.0);

    let mut group = c.benchmark_group("octree");
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("narrow_depth_20", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for p in &points {
                let mut cell = root;
                for _ in 0..20 {
                    let (octant, next) = cell.narrow(*p);
                    acc += octant.index();
                    cell = next;
                }
            }
            black_box(acc)
        });
    });

    group.bench_function("octants_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for p in &points {
                for sub in root.octants() {
                    acc += sub.dist_to_point(*p);
                }
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_image_bounds(c: &mut Criterion) {
    let mut rng = Rng::new(0xdead_beef);
    let boxes = gen_boxes(&mut rng, 1024, 1000.0, 50.0);
    // A rotation about z by ~30 degrees; convex-extremal, so corner images
    // bound the whole image.
    let (s, c30) = (0.5, 0.8660254037844387);
    let m = Mat3::from_rows([[c30, -s, 0.0], [s, c30, 0.0], [0.0, 0.0, 1.0]]);

    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Elements(boxes.len() as u64));

    group.bench_function("image_bounds_rotation", |b| {
        b.iter_batched(
            || boxes.clone(),
            |boxes| {
                let mut acc = 0.0;
                for bx in &boxes {
                    let img = bx.image_bounds(|p| m.apply(p));
                    acc += img.extents().x;
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_point_box_distances,
    bench_box_box_bounds,
    bench_narrow_descent,
    bench_image_bounds,
);
criterion_main!(benches);
