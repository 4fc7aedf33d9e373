// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_timeline::{
    DisplayList, Geometry, ManualClock, RecordStore, Tier, TimeRecord, Timeline, TimelineConfig,
    Viewport, resolve,
};

const MIN: i64 = 60_000;
const HOUR: i64 = 60 * MIN;
const NOW: i64 = 1_761_998_400_000;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_below(&mut self, upper: i64) -> i64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % upper as u64) as i64
    }
}

/// `count` records, newest first, averaging one every five minutes.
fn tier(count: usize, seed: u64) -> Vec<TimeRecord<u32>> {
    let mut rng = Lcg(seed);
    let mut ts = NOW;
    (0..count as u32)
        .map(|i| {
            ts -= rng.next_below(10 * MIN);
            TimeRecord::new(ts, rng.next_below(8 * MIN), i)
        })
        .collect()
}

fn store(count: usize) -> RecordStore<u32> {
    let mut store = RecordStore::new();
    store.replace(Tier::Major1, tier(count, 0x7153_0000_0000_0001));
    store.replace(Tier::Major2, tier(count / 4, 0x7153_0000_0000_0002));
    store.replace(Tier::Background, tier(count / 8, 0x7153_0000_0000_0003));
    store
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_timeline");
    group.sample_size(50);
    let config = TimelineConfig::default();

    for &n in &[1_000_usize, 10_000, 100_000] {
        let store = store(n);
        let oldest = store.oldest(Tier::Major1).map_or(NOW, TimeRecord::timestamp_ms);

        group.bench_function(format!("recompute(n={n})"), |b| {
            let mut geometry = Geometry::new();
            let mut cursor = NOW;
            b.iter(|| {
                cursor -= 7 * MIN;
                if cursor < oldest {
                    cursor = NOW;
                }
                let viewport = Viewport {
                    size: Size::new(1080.0, 240.0),
                    interval_ms: HOUR,
                    cursor_ms: cursor,
                    now_ms: NOW,
                };
                geometry.recompute(&viewport, &store, &config);
                black_box(geometry.tier(Tier::Major1).visible.len());
            });
        });

        group.bench_function(format!("resolve_tap(n={n})"), |b| {
            let mut rng = Lcg(0x7153_0000_0000_0004);
            b.iter(|| {
                let candidate = NOW - rng.next_below(NOW - oldest + 1);
                black_box(resolve(&store, candidate));
            });
        });
    }

    group.bench_function("paint(n=10000)", |b| {
        let clock = ManualClock::new(NOW);
        let records = store(10_000);
        b.iter_batched(
            || {
                let mut timeline: Timeline<u32, _> = Timeline::new(&clock);
                timeline.set_viewport_size(Size::new(1080.0, 240.0));
                for t in Tier::ALL {
                    timeline.set_records(t, records.get(t).to_vec());
                }
                timeline.set_cursor(NOW - 3 * HOUR);
                (timeline, DisplayList::default())
            },
            |(mut timeline, mut list)| {
                timeline.paint(&mut list);
                black_box(list.commands().len());
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_timeline);
criterion_main!(benches);
