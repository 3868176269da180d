// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use codecity_index::{Backend, Footprint, FootprintIndex};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` x `n` touching squares, like a district packed with equal buildings.
fn grid_footprints(n: usize, cell: f64) -> Vec<Footprint> {
    let mut out = Vec::with_capacity(n * n);
    for z in 0..n {
        for x in 0..n {
            out.push(Footprint::from_origin_size(x as f64 * cell, z as f64 * cell, cell, cell));
        }
    }
    out
}

/// Random probes of building size scattered over a square district.
fn random_probes(count: usize, side: f64, size: f64) -> Vec<Footprint> {
    let mut rng = StdRng::seed_from_u64(0xCAFE_F00D);
    (0..count)
        .map(|_| {
            let x = rng.random::<f64>() * (side - size);
            let z = rng.random::<f64>() * (side - size);
            Footprint::from_origin_size(x, z, size, size)
        })
        .collect()
}

/// Fill the index, then ask the packer's question for every probe.
fn fill_and_probe<B: Backend>(
    mut index: FootprintIndex<u32, B>,
    footprints: &[Footprint],
    probes: &[Footprint],
) -> usize {
    for (i, f) in footprints.iter().enumerate() {
        index.insert(*f, i as u32);
    }
    probes.iter().filter(|p| index.first_overlap(**p).is_some()).count()
}

fn bench_backends(c: &mut Criterion) {
    for &n in &[8usize, 16, 32, 64] {
        let cell = 4.0;
        let side = n as f64 * cell * 2.0;
        // Every other cell is taken so roughly a quarter of the probes are free.
        let taken: Vec<_> = grid_footprints(n, cell * 2.0)
            .into_iter()
            .map(|f| f.inset(cell * 0.5))
            .collect();
        let probes = random_probes(256, side, cell);

        let mut group = c.benchmark_group(format!("reserve_then_probe_n{n}"));
        group.throughput(Throughput::Elements((taken.len() + probes.len()) as u64));
        group.bench_function("flatvec", |b| {
            b.iter_batched(
                FootprintIndex::<u32>::new,
                |idx| black_box(fill_and_probe(idx, &taken, &probes)),
                BatchSize::SmallInput,
            );
        });
        group.bench_function("grid", |b| {
            b.iter_batched(
                || FootprintIndex::<u32, _>::with_uniform_grid(side / 16.0, side / 16.0, 0.0, 0.0),
                |idx| black_box(fill_and_probe(idx, &taken, &probes)),
                BatchSize::SmallInput,
            );
        });
        group.finish();
    }
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
