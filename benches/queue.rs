// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification queue operations.
//!
//! Push and dismiss are on the hot path of every user-visible event, so
//! they should stay trivially cheap even with many live toasts.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_herald::ui::notifications::{Queue, Severity};
use std::hint::black_box;

fn bench_push(c: &mut Criterion) {
    c.bench_function("queue_push", |b| {
        b.iter_batched(
            Queue::new,
            |mut queue| {
                let (id, _task) = queue.push(Severity::Info, "title", "body");
                black_box(id);
                queue
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_dismiss_among_many(c: &mut Criterion) {
    c.bench_function("queue_dismiss_among_100", |b| {
        b.iter_batched(
            || {
                let mut queue = Queue::new();
                let mut ids = Vec::new();
                for i in 0..100 {
                    let (id, _task) = queue.push(Severity::Info, format!("t{i}"), "");
                    ids.push(id);
                }
                (queue, ids[50])
            },
            |(mut queue, id)| {
                black_box(queue.dismiss(id));
                queue
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_push, bench_dismiss_among_many);
criterion_main!(benches);
