// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_flap::{Flap, FlapMeasurements, SizeRequest, TransitionType};

const SIDEBAR: FlapMeasurements = FlapMeasurements {
    flap: Some(SizeRequest {
        min: 240.0,
        natural: 280.0,
        expand: false,
    }),
    content: Some(SizeRequest {
        min: 360.0,
        natural: 600.0,
        expand: true,
    }),
    separator: 1.0,
};

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("flap/allocate");
    for transition in [TransitionType::Over, TransitionType::Under, TransitionType::Slide] {
        let mut flap = Flap::new();
        flap.set_transition_type(transition);
        group.bench_function(format!("{transition:?}"), |b| {
            b.iter(|| black_box(flap.allocate(Size::new(1_024.0, 768.0), &SIDEBAR)));
        });
    }
    group.finish();
}

fn bench_fold_frames(c: &mut Criterion) {
    c.bench_function("flap/fold_frames", |b| {
        b.iter_batched(
            || {
                let mut flap = Flap::new();
                flap.allocate(Size::new(1_024.0, 768.0), &SIDEBAR);
                flap.allocate(Size::new(480.0, 768.0), &SIDEBAR);
                flap
            },
            |mut flap| {
                let mut now = 0;
                while flap.needs_frame() && now <= 1_000 {
                    flap.tick(now);
                    flap.allocate(Size::new(480.0, 768.0), &SIDEBAR);
                    now += 16;
                }
                black_box(flap.drain_events())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_allocate, bench_fold_frames);
criterion_main!(benches);
