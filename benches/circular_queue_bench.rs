use celerity::CircularQueue;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::VecDeque;
use std::time::Duration;

fn bench_fill_drain(c: &mut Criterion) {
    let mut g = c.benchmark_group("queue_fill_drain_10k");
    g.bench_function("circular_queue", |b| {
        b.iter_batched(
            CircularQueue::<u64>::new,
            |mut q| {
                for i in 0..10_000u64 {
                    q.enqueue(i);
                }
                while let Ok(v) = q.dequeue() {
                    black_box(v);
                }
                q
            },
            BatchSize::SmallInput,
        )
    });
    g.bench_function("vecdeque", |b| {
        b.iter_batched(
            VecDeque::<u64>::new,
            |mut q| {
                for i in 0..10_000u64 {
                    q.push_back(i);
                }
                while let Some(v) = q.pop_front() {
                    black_box(v);
                }
                q
            },
            BatchSize::SmallInput,
        )
    });
    g.finish();
}

fn bench_steady_state(c: &mut Criterion) {
    c.bench_function("circular_queue_enqueue_dequeue", |b| {
        let mut q = CircularQueue::with_capacity(1024);
        for i in 0..512u64 {
            q.enqueue(i);
        }
        let mut n = 512u64;
        b.iter(|| {
            q.enqueue(n);
            n += 1;
            black_box(q.dequeue().ok());
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_fill_drain, bench_steady_state
}
criterion_main!(benches);
