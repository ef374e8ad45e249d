//! Benchmarks for Presage reconciliation operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use presage_core::{ActionEnvelope, Message};
use presage_engine::ReconciliationEngine;

type TagEngine = ReconciliationEngine<i64, i64, fn(i64, &i64) -> i64>;

fn summing(state: i64, delta: &i64) -> i64 {
    state + delta
}

fn engine() -> TagEngine {
    ReconciliationEngine::new(summing as fn(i64, &i64) -> i64)
}

/// Engine with `depth` pending actions, plus their resolution handles
fn engine_with_pending(depth: usize) -> (TagEngine, i64, Vec<ActionEnvelope<i64>>) {
    let mut engine = engine();
    let mut state = 0i64;
    let mut handles = Vec::with_capacity(depth);

    for i in 0..depth {
        let (message, handle) = Message::optimistic(i as i64 + 1);
        state = engine.reduce(state, message).unwrap();
        handles.push(handle);
    }

    (engine, state, handles)
}

fn bench_pending_dispatch(c: &mut Criterion) {
    c.bench_function("pending_dispatch", |b| {
        b.iter_batched(
            engine,
            |mut engine| {
                let (message, _handle) = Message::optimistic(1i64);
                black_box(engine.reduce(0, message).unwrap())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_success_fold_in_order(c: &mut Criterion) {
    c.bench_function("success_fold_in_order", |b| {
        b.iter_batched(
            || engine_with_pending(64),
            |(mut engine, mut state, handles)| {
                for handle in &handles {
                    handle.resolve_success();
                    state = engine.reduce(state, Message::from(handle.clone())).unwrap();
                }
                black_box(state)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_failure_replay_deep_queue(c: &mut Criterion) {
    c.bench_function("failure_replay_deep_queue", |b| {
        b.iter_batched(
            || engine_with_pending(64),
            |(mut engine, state, handles)| {
                // The head fails: everything behind it is replayed
                handles[0].resolve_failure();
                black_box(
                    engine
                        .reduce(state, Message::from(handles[0].clone()))
                        .unwrap(),
                )
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_pending_dispatch,
    bench_success_fold_in_order,
    bench_failure_replay_deep_queue,
);
criterion_main!(benches);
