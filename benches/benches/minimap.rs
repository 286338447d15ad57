// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use vantage_fit::{MAX_MINI_MAP_SIZE, container_to_image, fit_contain};
use vantage_minimap::{OverlayBands, map_point_to_target, viewport_rect};
use vantage_view::Transform;

const CONTAINER: Size = Size::new(1280.0, 720.0);

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("vantage_minimap");
    let naturals = [
        Size::new(4000.0, 3000.0),
        Size::new(1080.0, 1920.0),
        Size::new(6000.0, 1500.0),
    ];

    for natural in naturals {
        let drawn = fit_contain(natural, MAX_MINI_MAP_SIZE);
        let label = format!("{}x{}", natural.width, natural.height);

        group.bench_function(format!("viewport_and_bands({label})"), |b| {
            let mut scale = 1.0;
            b.iter(|| {
                scale = if scale >= 4.0 { 1.0 } else { scale + 0.01 };
                let t = Transform::new(scale, -100.0 * scale, -50.0 * scale);
                if let Some(viewport) = viewport_rect(drawn, &t, CONTAINER, black_box(natural)) {
                    black_box(OverlayBands::around(viewport, drawn));
                }
            });
        });

        group.bench_function(format!("click_to_target({label})"), |b| {
            let click = drawn.center() + kurbo::Vec2::new(13.0, -7.0);
            b.iter(|| black_box(map_point_to_target(black_box(click), drawn, natural, CONTAINER)));
        });
    }

    group.bench_function("container_to_image", |b| {
        let natural = Size::new(4000.0, 3000.0);
        let p = Point::new(640.0, 360.0);
        b.iter(|| black_box(container_to_image(black_box(p), CONTAINER, natural)));
    });
    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
