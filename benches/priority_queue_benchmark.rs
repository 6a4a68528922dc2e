use criterion::{black_box, criterion_group, criterion_main, Criterion};
use guarded::{Heap, HeapPriorityQueue, IndexedPriorityQueue, MinFirst, MutexHeap, PriorityQueue, RwLockHeap};
use std::collections::BinaryHeap;
use std::cmp::Reverse;
use std::thread;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(Reverse(black_box(i)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("rwlock_heap_push_pop", |b| {
        b.iter(|| {
            let heap = RwLockHeap::new(MinFirst);
            for i in 0..1000 {
                heap.push(black_box(i));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("mutex_heap_push_pop", |b| {
        b.iter(|| {
            let heap = MutexHeap::new(MinFirst);
            for i in 0..1000 {
                heap.push(black_box(i));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("heap_priority_queue_push_pop", |b| {
        b.iter(|| {
            let pq = HeapPriorityQueue::new(MinFirst);
            for i in 0..1000 {
                pq.push(black_box(i));
            }
            while let Some(x) = pq.pop() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue_indexed");

    group.bench_function("update_at_with_hook", |b| {
        let pq = IndexedPriorityQueue::from_vec((0..1000).collect(), MinFirst).with_on_swap(|i, j, items: &[u64]| {
            black_box((i, j, items.len()));
        });
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(7919);
            let slot = (n % 1000) as usize;
            pq.update_at(slot, black_box(n % 2000));
        });
    });

    group.bench_function("contended_push_4_threads", |b| {
        b.iter(|| {
            let heap = RwLockHeap::new(MinFirst);
            thread::scope(|s| {
                for t in 0..4u64 {
                    let heap = &heap;
                    s.spawn(move || {
                        for i in 0..250 {
                            heap.push(t * 250 + i);
                        }
                    });
                }
            });
            black_box(heap.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_indexed);
criterion_main!(benches);
