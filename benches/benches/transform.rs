// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use vantage_gesture::swipe::{GestureSample, SwipeConfig, SwipeContext, classify};
use vantage_view::{Transform, TransformEngine, ViewConfig};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn candidates(n: usize, seed: u64) -> Vec<Transform> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            Transform::new(
                rng.range(0.25, 8.0),
                rng.range(-4_000.0, 1_000.0),
                rng.range(-3_000.0, 1_000.0),
            )
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("vantage_view");
    let engine = TransformEngine::new(ViewConfig::default(), Size::new(1920.0, 1080.0));
    let inputs = candidates(1_024, 0x5EED_0000_0000_0001);

    group.bench_function("clamp(1024)", |b| {
        b.iter(|| {
            for t in &inputs {
                black_box(engine.clamp(black_box(*t)));
            }
        });
    });

    group.bench_function("zoom_pan_cycle", |b| {
        let mut engine = TransformEngine::new(ViewConfig::default(), Size::new(1920.0, 1080.0));
        let mut rng = Lcg::new(7);
        b.iter(|| {
            let anchor = Point::new(rng.range(0.0, 1920.0), rng.range(0.0, 1080.0));
            engine.zoom_to(rng.range(1.0, 4.0), Some(anchor), 0.0);
            engine.pan_by(Vec2::new(rng.range(-50.0, 50.0), rng.range(-50.0, 50.0)));
            black_box(engine.edge_contact());
        });
    });
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let config = SwipeConfig::default();
    let context = SwipeContext::at_scale(1.5, 1.0).with_edges(false, true);
    let mut rng = Lcg::new(11);
    let gestures: Vec<(GestureSample, GestureSample)> = (0..1_024)
        .map(|_| {
            let start = GestureSample::new(Point::new(rng.range(0.0, 800.0), 300.0), 0.0);
            let end = GestureSample::new(
                Point::new(rng.range(0.0, 800.0), rng.range(250.0, 350.0)),
                rng.range(50.0, 900.0),
            );
            (start, end)
        })
        .collect();

    c.bench_function("vantage_gesture/classify(1024)", |b| {
        b.iter(|| {
            for (start, end) in &gestures {
                black_box(classify(start, end, &context, &config));
            }
        });
    });
}

criterion_group!(benches, bench_engine, bench_classify);
criterion_main!(benches);
