use guarded::{
    calculate_map_diff, Buffer, BufferConfig, ConcurrentMap, ConcurrentSet, Equality, Heap, Map, MinFirst, MutexBuffer,
    MutexMap, MutexQueue, MutexSet, Queue, RwLockBuffer, RwLockHeap, RwLockMap, RwLockQueue, RwLockSet, Set,
    ShardedBuffer,
};
use std::collections::HashMap;
use std::thread;

fn exercise_cas<M: Map<&'static str, i32>>(map: &M) {
    map.set("counter", 1);
    assert!(map.compare_and_swap(&"counter", &1, 2));
    assert_eq!(map.get(&"counter"), Some(2));
    assert!(!map.compare_and_swap(&"counter", &1, 3));
    assert_eq!(map.get(&"counter"), Some(2));
}

#[test]
fn test_map_compare_and_swap_all_strategies() {
    exercise_cas(&MutexMap::with_equality(Equality::native()));
    exercise_cas(&RwLockMap::with_equality(Equality::native()));
    exercise_cas(&ConcurrentMap::with_equality(Equality::native()));
}

#[test]
fn test_map_strategies_agree() {
    let mutex: MutexMap<i32, i32> = MutexMap::new();
    let rwlock: RwLockMap<i32, i32> = RwLockMap::new();
    let sharded: ConcurrentMap<i32, i32> = ConcurrentMap::new();

    for i in 0..50 {
        for map in [&mutex as &dyn Map<i32, i32>, &rwlock, &sharded] {
            map.set(i, i * i);
            if i % 3 == 0 {
                map.delete(&i);
            }
            if i % 5 == 0 {
                map.swap(i, -i);
            }
        }
    }

    assert!(mutex.equals(&rwlock, |a, b| a == b));
    assert!(rwlock.equals(&sharded, |a, b| a == b));
    assert_eq!(mutex.get_all(), sharded.get_all());
}

#[test]
fn test_map_snapshot_isolation() {
    let map: RwLockMap<i32, i32> = (0..100).map(|i| (i, i)).collect();
    let snapshot = map.all();

    map.clear();
    map.set(1000, 1000);

    let mut keys: Vec<_> = snapshot.map(|(k, _)| k).collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..100).collect::<Vec<_>>());
    assert_eq!(map.len(), 1);
}

#[test]
fn test_map_snapshot_under_concurrent_writers() {
    let map: MutexMap<usize, usize> = (0..1000).map(|i| (i, i)).collect();
    let snapshot = map.all();
    thread::scope(|s| {
        s.spawn(|| {
            for i in 1000..2000 {
                map.set(i, i);
            }
            map.delete(&0);
        });
    });

    let mut keys: Vec<usize> = snapshot
        .map(|(k, v)| {
            assert_eq!(k, v);
            k
        })
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..1000).collect::<Vec<_>>());
    assert_eq!(map.len(), 1999);
}

#[test]
fn test_map_range_visits_only_its_snapshot() {
    let map: RwLockMap<usize, usize> = (0..1000).map(|i| (i, i)).collect();
    let mut seen = 0;
    map.range(|k, _| {
        assert!(*k < 1000);
        // Writes from inside the visitor land after the snapshot was taken.
        map.set(k + 1000, 0);
        seen += 1;
        true
    });
    assert_eq!(seen, 1000);
    assert_eq!(map.len(), 2000);
}

#[test]
fn test_heap_snapshot_survives_concurrent_clear() {
    let heap = RwLockHeap::from_vec((0..1000u32).collect(), MinFirst);
    let snapshot = heap.all();
    thread::scope(|s| {
        s.spawn(|| {
            heap.clear();
            heap.extend(5000..5010);
        });
    });

    let mut items: Vec<u32> = snapshot.collect();
    items.sort_unstable();
    assert_eq!(items, (0..1000).collect::<Vec<_>>());
    assert_eq!(heap.len(), 10);
    assert_eq!(heap.peek(), Some(5000));
}

#[test]
fn test_queue_snapshot_survives_concurrent_drain() {
    let queue: MutexQueue<u32> = (0..500).collect();
    let snapshot = queue.all();
    thread::scope(|s| {
        s.spawn(|| {
            while queue.pop().is_some() {}
            queue.push(9000);
        });
    });

    assert_eq!(snapshot.collect::<Vec<_>>(), (0..500).collect::<Vec<_>>());
    assert_eq!(queue.to_vec(), vec![9000]);
}

#[test]
fn test_set_concurrent_distinct_adds() {
    const THREADS: usize = 8;
    let rw: RwLockSet<usize> = RwLockSet::new();
    let mutex: MutexSet<usize> = MutexSet::new();
    let sharded: ConcurrentSet<usize> = ConcurrentSet::new();

    thread::scope(|s| {
        for t in 0..THREADS {
            let (rw, mutex, sharded) = (&rw, &mutex, &sharded);
            s.spawn(move || {
                for i in 0..100 {
                    let value = t * 100 + i;
                    assert!(rw.add(value));
                    assert!(mutex.add(value));
                    assert!(sharded.add(value));
                }
            });
        }
    });

    for set in [&rw as &dyn Set<usize>, &mutex, &sharded] {
        assert_eq!(set.len(), THREADS * 100);
        assert!((0..THREADS * 100).all(|v| set.has(&v)));
    }
}

#[test]
fn test_set_zero_value_and_clear() {
    let set: RwLockSet<String> = RwLockSet::default();
    assert!(!set.has(&"x".to_string()));
    assert!(set.to_vec().is_empty());

    set.add("x".to_string());
    set.clear();
    set.clear();
    assert!(set.is_empty());
    assert!(set.add("x".to_string()));
}

#[test]
fn test_queue_fifo_across_compaction() {
    let queue = RwLockQueue::new();
    let mut next_out = 0;

    // Two pushes per pop keeps the backlog growing while the head crosses the
    // compaction threshold several times.
    for i in 0..500 {
        queue.push(2 * i);
        queue.push(2 * i + 1);
        assert_eq!(queue.pop(), Some(next_out));
        next_out += 1;
        assert_eq!(queue.len(), i + 1);
    }
    while let Some(x) = queue.pop() {
        assert_eq!(x, next_out);
        next_out += 1;
    }
    assert_eq!(next_out, 1000);
    assert!(queue.is_empty());
}

#[test]
fn test_queue_alternating_push_pop() {
    let queue: MutexQueue<usize> = MutexQueue::default();
    for i in 0..200 {
        queue.push(i);
        assert_eq!(queue.peek(), Some(i));
        assert_eq!(queue.pop(), Some(i));
        assert_eq!(queue.len(), 0);
    }
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_queue_producers_and_consumer() {
    let queue = MutexQueue::new();
    thread::scope(|s| {
        for t in 0..4usize {
            let queue = &queue;
            s.spawn(move || {
                for i in 0..250 {
                    queue.push((t, i));
                }
            });
        }
    });

    let mut last_seen = [None::<usize>; 4];
    let mut total = 0;
    while let Some((producer, i)) = queue.pop() {
        if let Some(prev) = last_seen[producer] {
            assert!(i > prev, "producer {producer} reordered");
        }
        last_seen[producer] = Some(i);
        total += 1;
    }
    assert_eq!(total, 1000);
}

#[test]
fn test_buffer_round_trip_all_variants() {
    let buffers: Vec<Box<dyn Buffer<u32>>> = vec![
        Box::new(MutexBuffer::<u32>::new(0)),
        Box::new(RwLockBuffer::<u32>::from(Vec::new())),
        Box::new(ShardedBuffer::<u32>::new(1, 4)),
    ];

    for buffer in buffers {
        for x in [1, 2, 3] {
            buffer.append(x);
        }
        assert_eq!(buffer.peek(), vec![1, 2, 3]);
        assert_eq!(buffer.all().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(buffer.flush(), vec![1, 2, 3]);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.flush().is_empty());
    }
}

#[test]
fn test_sharded_buffer_from_config() {
    let config: BufferConfig = serde_json::from_str(r#"{"shard_count": 0, "initial_capacity": 8}"#).unwrap();
    let buffer = ShardedBuffer::<u32>::from_config(&config);
    assert_eq!(buffer.shard_count(), 1);

    let wide = ShardedBuffer::from_config(&BufferConfig::default().shard_count(8));
    wide.extend(0..10);
    assert_eq!(wide.flush(), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_buffer_flush_races_with_appends() {
    let buffer = ShardedBuffer::new(4, 16);
    let mut collected = Vec::new();
    thread::scope(|s| {
        for t in 0..4u64 {
            let buffer = &buffer;
            s.spawn(move || {
                for i in 0..500 {
                    buffer.append(t * 500 + i);
                }
            });
        }
        for _ in 0..10 {
            collected.extend(buffer.flush());
        }
    });
    collected.extend(buffer.flush());
    collected.sort_unstable();
    assert_eq!(collected, (0..2000).collect::<Vec<_>>());
}

#[test]
fn test_map_diff_between_snapshots() {
    let map = RwLockMap::new();
    map.set_many([("a", 1), ("b", 2), ("c", 3)]);
    let before = map.get_all();

    map.set("b", 20);
    map.delete(&"c");
    map.set("d", 4);
    let after = map.get_all();

    let diff = calculate_map_diff(&after, &before, |a, b| a == b);
    assert_eq!(diff.added_or_modified, HashMap::from([("b", 20), ("d", 4)]));
    assert_eq!(diff.removed, HashMap::from([("c", 3)]));
}
