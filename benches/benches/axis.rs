// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_axis::LinearAxis;

const MIN: i64 = 60_000;
const HOUR: i64 = 60 * MIN;
const DAY: i64 = 24 * HOUR;
const LADDER: [i64; 8] = [
    MIN,
    5 * MIN,
    15 * MIN,
    30 * MIN,
    HOUR,
    6 * HOUR,
    12 * HOUR,
    DAY,
];

fn bench_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_axis");

    for &(span, extent) in &[(HOUR, 360.0), (HOUR, 1080.0), (7 * DAY, 1080.0)] {
        let axis = LinearAxis::new(1_761_998_400_000 - span / 2, span, extent)
            .with_origin_offset(2 * HOUR);
        group.bench_function(format!("choose_and_tick(span={span},w={extent})"), |b| {
            b.iter(|| {
                let anchor = axis.start() + span / 2;
                let sum = axis
                    .choose_step(&LADDER, 72.0, anchor)
                    .map_or(0.0, |step| axis.ticks(step).map(|t| t.x).sum::<f64>());
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_axis);
criterion_main!(benches);
