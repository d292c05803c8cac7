use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;

use super::*;

fn assert_covers_once<E: Executor>(executor: &E, len: usize, partition: Partition) {
    let hits: Vec<AtomicUsize> = (0..len).map(|_| AtomicUsize::new(0)).collect();
    let total = executor
        .sum(len, partition, |range| {
            let width = range.len();
            for index in range {
                hits[index].fetch_add(1, Ordering::Relaxed);
            }
            width
        })
        .expect("phase completes");

    assert_eq!(total, len);
    for (index, hit) in hits.iter().enumerate() {
        assert_eq!(hit.load(Ordering::Relaxed), 1, "index {index} visited wrongly");
    }
}

#[rstest]
#[case::empty(0, Partition::Static)]
#[case::static_small(7, Partition::Static)]
#[case::static_large(10_001, Partition::Static)]
#[case::dynamic_unit(33, Partition::Dynamic { chunk: 1 })]
#[case::dynamic_large(10_001, Partition::Dynamic { chunk: 128 })]
#[case::chunk_exceeds_len(5, Partition::Dynamic { chunk: 4096 })]
fn every_executor_visits_each_index_once(#[case] len: usize, #[case] partition: Partition) {
    assert_covers_once(&Sequential, len, partition);
    for workers in [1, 3, 8] {
        assert_covers_once(&WorkerPool::new(workers), len, partition);
        #[cfg(feature = "parallel")]
        {
            let bulk = BulkSynchronous::new(workers).expect("pool builds");
            assert_covers_once(&bulk, len, partition);
            let fork_join = ForkJoin::new(workers).expect("pool builds");
            assert_covers_once(&fork_join, len, partition);
        }
    }
}

#[test]
fn for_each_runs_body_over_whole_range() {
    let seen = AtomicUsize::new(0);
    WorkerPool::new(4)
        .for_each(100, Partition::Dynamic { chunk: 7 }, |range| {
            seen.fetch_add(range.len(), Ordering::Relaxed);
        })
        .expect("phase completes");
    assert_eq!(seen.into_inner(), 100);
}

#[test]
#[should_panic(expected = "worker body failed")]
fn worker_pool_propagates_panics() {
    let _ = WorkerPool::new(2).sum(10, Partition::Static, |range| {
        assert!(range.start != 0, "worker body failed");
        range.len()
    });
}

#[rstest]
#[case(0, 4, 10, 0..3)]
#[case(3, 4, 10, 9..10)]
#[case(2, 4, 4, 2..3)]
#[case(5, 4, 4, 4..4)]
fn static_slices_are_contiguous(
    #[case] index: usize,
    #[case] parts: usize,
    #[case] len: usize,
    #[case] expected: Range<usize>,
) {
    assert_eq!(static_slice(index, parts, len), expected);
}

#[test]
fn chunk_range_clamps_tail() {
    assert_eq!(chunk_range(2, 4, 10), 8..10);
    assert_eq!(chunk_range(3, 4, 10), 10..10);
}

#[cfg(feature = "parallel")]
#[rstest]
#[case(1, 1_000_000, 2048)]
#[case(8, 64, 1)]
#[case(4, 3_200, 100)]
fn fork_join_grain_follows_parallel_loop_default(
    #[case] workers: usize,
    #[case] len: usize,
    #[case] expected: usize,
) {
    let executor = ForkJoin::new(workers).expect("pool builds");
    assert_eq!(executor.grain(len), expected);
}
