// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use epiphyte_surface::adapter::Adapter;
use epiphyte_surface::engine::PositionEngine;
use epiphyte_surface::host::SurfaceHost;
use epiphyte_surface::surface::Surface;

const ROOT: u32 = 1;

/// Host that accepts every write and answers every query with the neutral
/// defaults; the benchmarks measure the surface core, not a host.
struct NullHost;

impl SurfaceHost<u32> for NullHost {}

/// Minimal quick-open engine.
#[derive(Default)]
struct Quick {
    open: bool,
}

impl PositionEngine<u32> for Quick {
    fn open(&mut self, surface: &mut Adapter<'_, u32>) {
        if !self.open {
            self.open = true;
            surface.notify_open();
        }
    }

    fn close(&mut self, surface: &mut Adapter<'_, u32>) {
        if self.open {
            self.open = false;
            surface.notify_close();
        }
    }
}

fn attached() -> (Surface<u32, Quick>, NullHost) {
    let mut host = NullHost;
    let mut surface = Surface::new(ROOT);
    surface.attach(Quick::default(), &mut host);
    (surface, host)
}

fn bench_body_click_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/body_click");

    // The dismissal decision is a membership scan over the dispatch path;
    // deep composed trees produce the long paths.
    for len in [4_usize, 16, 64, 256] {
        let inside: Vec<u32> = (0..len as u32).chain([ROOT]).collect();
        let outside: Vec<u32> = (100..100 + len as u32).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("hit", len), &inside, |b, path| {
            b.iter_batched(
                || {
                    let (mut surface, mut host) = attached();
                    surface.show(&mut host);
                    (surface, host)
                },
                |(mut surface, mut host)| {
                    surface.handle_body_click(black_box(path), &mut host);
                    black_box(surface);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("miss", len), &outside, |b, path| {
            b.iter_batched(
                || {
                    let (mut surface, mut host) = attached();
                    surface.show(&mut host);
                    (surface, host)
                },
                |(mut surface, mut host)| {
                    surface.handle_body_click(black_box(path), &mut host);
                    black_box(surface);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_open_close_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/cycle");

    group.bench_function("open_close", |b| {
        let (mut surface, mut host) = attached();
        b.iter(|| {
            surface.show(&mut host);
            surface.close(&mut host);
        });
    });

    group.finish();
}

fn bench_offset_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/offset");

    // Alternating writes keep both axes committed, so every write reaches
    // the engine; this is the worst case for the two-phase commit.
    group.bench_function("xy_churn", |b| {
        let (mut surface, _host) = attached();
        surface.set_y(Some(0.0));
        let mut value = 0.0_f64;
        b.iter(|| {
            value += 1.0;
            surface.set_x(Some(black_box(value)));
            surface.set_y(Some(black_box(value)));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_body_click_paths,
    bench_open_close_cycle,
    bench_offset_churn
);
criterion_main!(benches);
