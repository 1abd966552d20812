// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use understory_carousel::{Carousel, SizeRequest};
use understory_swipe::Orientation;

fn pages(n: u32) -> Carousel<u32> {
    let mut carousel = Carousel::new();
    for page in 0..n {
        carousel.append(page);
    }
    carousel.drain_events();
    carousel
}

fn page_size(_: &u32, _: Orientation, _: f64) -> SizeRequest {
    SizeRequest {
        min: 0.0,
        natural: 320.0,
        expand: false,
    }
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/insert");
    for len in [16_u32, 128, 1_024] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::new("append", len), &len, |b, &len| {
            b.iter(|| black_box(pages(len)));
        });
        // Inserting at the front shifts every snap point behind the new page.
        group.bench_with_input(BenchmarkId::new("prepend", len), &len, |b, &len| {
            b.iter(|| {
                let mut carousel = Carousel::new();
                for page in 0..len {
                    carousel.prepend(page);
                }
                black_box(carousel.drain_events())
            });
        });
    }
    group.finish();
}

fn bench_scroll_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/scroll_frames");
    for len in [16_u32, 128, 1_024] {
        group.bench_with_input(BenchmarkId::new("tick", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut carousel = pages(len);
                    carousel.scroll_to_full(len - 1, 250);
                    carousel
                },
                |mut carousel| {
                    for now in (0..=250).step_by(16) {
                        carousel.tick(now);
                    }
                    carousel.tick(250);
                    black_box(carousel.position())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/allocate");
    for len in [16_u32, 128, 1_024] {
        let mut carousel = pages(len);
        carousel.set_position(f64::from(len / 2));
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(carousel.allocate(Size::new(360.0, 640.0), &mut page_size)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_scroll_frames, bench_allocate);
criterion_main!(benches);
