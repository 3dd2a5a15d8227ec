//! Ring buffer throughput benchmarks
//!
//! Measures single-element and bulk enqueue/dequeue across cursor widths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringfifo::{RingBuffer, RingConfig};

/// Fill to capacity, then drain, one element at a time
fn fill_drain_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for capacity in [64usize, 4096, 1 << 16] {
        group.throughput(Throughput::Elements(capacity as u64));
        group.bench_with_input(BenchmarkId::new("usize", capacity), &capacity, |b, &capacity| {
            let mut ring = RingBuffer::<u64, Vec<u64>>::with_capacity(capacity).unwrap();
            b.iter(|| {
                for i in 0..capacity as u64 {
                    let _ = ring.try_enqueue(black_box(i));
                }
                while let Some(v) = ring.try_dequeue_front() {
                    black_box(v);
                }
            });
        });
    }

    group.bench_function(BenchmarkId::new("u8", 254), |b| {
        let mut ring: RingBuffer<u64, _, u8> =
            RingBuffer::with_cursor_width([0u64; 255], RingConfig::new()).unwrap();
        b.iter(|| {
            for i in 0..254u64 {
                let _ = ring.try_enqueue(black_box(i));
            }
            while let Some(v) = ring.try_dequeue_front() {
                black_box(v);
            }
        });
    });

    group.finish();
}

/// Bulk transfer through `enqueue_many` / `dequeue_many`
fn bulk_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    let capacity = 4096;
    let input: Vec<u32> = (0..capacity as u32).collect();
    let mut output = vec![0u32; capacity];

    group.throughput(Throughput::Elements(capacity as u64));
    group.bench_function("enqueue_many_dequeue_many", |b| {
        let mut ring = RingBuffer::<u32, Vec<u32>>::with_capacity(capacity).unwrap();
        b.iter(|| {
            let accepted = ring.enqueue_many(black_box(&input).iter().copied());
            let produced = ring.dequeue_many(&mut output);
            black_box((accepted, produced));
        });
    });

    group.finish();
}

/// Steady-state producer/consumer with a half-full ring
fn steady_state_benchmark(c: &mut Criterion) {
    let mut ring = RingBuffer::<u64, Vec<u64>>::with_capacity(1024).unwrap();
    ring.enqueue_many(0..512);

    c.bench_function("steady_state_cycle", |b| {
        let mut next = 512u64;
        b.iter(|| {
            let _ = ring.try_enqueue(black_box(next));
            next = next.wrapping_add(1);
            black_box(ring.try_dequeue_front());
        });
    });
}

criterion_group!(
    benches,
    fill_drain_benchmark,
    bulk_benchmark,
    steady_state_benchmark
);
criterion_main!(benches);
