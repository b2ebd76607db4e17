// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use tether_event::SimpleTree;
use tether_floating::{Align, FloatingOptions, Geometry, compute_position};
use tether_geometry::{Side, convex_hull, point_in_polygon};
use tether_transit::{TransitOptions, TransitStrategy, TransitTracker};

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

fn gen_points(count: usize, w: f64, h: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * w, rng.next_f64() * h))
        .collect()
}

/// Anchors scattered over a viewport, many of them near an edge so that
/// shift and flip have work to do.
fn gen_anchors(count: usize, view: Rect) -> Vec<Rect> {
    let mut rng = Rng::new(0x5EED_0F_A11C_E5);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (view.width() - 80.0);
            let y = rng.next_f64() * (view.height() - 24.0);
            Rect::new(x, y, x + 80.0, y + 24.0)
        })
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for &n in &[16usize, 256, 4096] {
        let pts = gen_points(n, 800.0, 600.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("convex_hull_n{}", n), |b| {
            b.iter(|| black_box(convex_hull(black_box(&pts))));
        });
    }

    let hull = convex_hull(&gen_points(64, 800.0, 600.0));
    let probes = gen_points(1024, 900.0, 700.0);
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("point_in_polygon_hull64", |b| {
        b.iter(|| {
            let inside = probes.iter().filter(|p| point_in_polygon(**p, &hull)).count();
            black_box(inside);
        });
    });
    group.finish();
}

fn bench_compute_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_position");
    let view = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let anchors = gen_anchors(512, view);
    group.throughput(Throughput::Elements(anchors.len() as u64));
    for (name, side, align) in [
        ("bottom_center", Side::Bottom, Align::Center),
        ("right_start", Side::Right, Align::Start),
    ] {
        let options = FloatingOptions {
            side,
            align,
            side_offset: 8.0,
            ..FloatingOptions::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                for &anchor in &anchors {
                    let geometry = Geometry {
                        anchor,
                        content: Size::new(240.0, 180.0),
                        arrow: Some(Size::new(10.0, 5.0)),
                        boundary: view,
                    };
                    black_box(compute_position(&geometry, &options));
                }
            });
        });
    }
    group.finish();
}

fn bench_transit(c: &mut Criterion) {
    let mut group = c.benchmark_group("transit");
    let mut host = SimpleTree::new();
    host.insert(0_u32, None, Rect::new(0.0, 0.0, 1024.0, 768.0));
    host.insert(1, Some(0), Rect::new(100.0, 100.0, 200.0, 140.0));
    host.insert(2, Some(0), Rect::new(260.0, 200.0, 560.0, 400.0));
    let path: Vec<Point> = (0..64)
        .map(|i| {
            let t = f64::from(i) / 64.0;
            Point::new(200.0 + 60.0 * t, 120.0 + 80.0 * t)
        })
        .collect();
    group.throughput(Throughput::Elements(path.len() as u64));
    for (name, strategy) in [
        ("safe_polygon", TransitStrategy::SafePolygon),
        ("grace_area", TransitStrategy::GraceArea),
    ] {
        let options = TransitOptions {
            strategy,
            ..TransitOptions::default()
        };
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut t = TransitTracker::new(options).unwrap();
                    t.set_trigger(Some(1));
                    t.set_content(Some(2));
                    t
                },
                |mut t| {
                    let _ = t.trigger_leave(Point::new(200.0, 120.0), Some(0), 0, &host);
                    for &p in &path {
                        black_box(t.pointer_move(p, &host));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_compute_position, bench_transit);
criterion_main!(benches);
