// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use codecity::{BuildingSpec, City, CityConfig, Color, DistrictSpec, LayoutConfig};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A three-level package tree with `classes` buildings spread over it and one
/// reference per building.
fn synthetic_city(packages: usize, classes: usize) -> (Vec<DistrictSpec>, Vec<BuildingSpec>) {
    let mut rng = StdRng::seed_from_u64(0xC17E);
    let mut labels = Vec::new();
    for a in 0..packages {
        labels.push(format!("com.p{a}"));
        for b in 0..packages / 2 {
            labels.push(format!("com.p{a}.q{b}"));
        }
    }
    let districts = labels.iter().map(DistrictSpec::new).collect();
    let buildings = (0..classes)
        .map(|i| {
            let district = &labels[rng.random_range(0..labels.len())];
            let w = 1.0 + rng.random::<f64>() * 4.0;
            let h = 1.0 + rng.random::<f64>() * 12.0;
            let d = 1.0 + rng.random::<f64>() * 4.0;
            BuildingSpec::new(format!("C{i}"), district.as_str(), w, h, d)
                .with_color(Color::palette_pick(i))
                .connect(format!("C{}", rng.random_range(0..classes)))
        })
        .collect();
    (districts, buildings)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("city_build");
    for &(packages, classes) in &[(4usize, 50usize), (8, 200), (16, 1000)] {
        let (districts, buildings) = synthetic_city(packages, classes);
        let config = CityConfig::default();
        group.throughput(Throughput::Elements(classes as u64));
        group.bench_function(format!("packages{packages}_classes{classes}"), |b| {
            b.iter(|| {
                let city = City::build(&districts, &buildings, &config).unwrap();
                black_box(city.arcs().len())
            });
        });
    }
    group.finish();
}

fn bench_layout_only(c: &mut Criterion) {
    let (districts, buildings) = synthetic_city(16, 1000);
    let config = LayoutConfig::default();
    c.bench_function("layout_only_classes1000", |b| {
        b.iter(|| {
            let city = codecity::codecity_layout::layout(&districts, &buildings, &config).unwrap();
            black_box(city.buildings.len())
        });
    });
}

criterion_group!(benches, bench_pipeline, bench_layout_only);
criterion_main!(benches);
