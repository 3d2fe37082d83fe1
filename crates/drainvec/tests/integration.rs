//! End-to-end scenarios: million-element append streams, full drains, and
//! the container lifecycle from empty through drained-and-cleared.

use drainvec::DrainVec;

#[test]
fn million_element_append_and_drain() {
    let mut vec = DrainVec::with_block_capacity(100_000);
    for i in 0..1_000_000usize {
        vec.push(i);
    }

    assert_eq!(vec.len(), 1_000_000);
    assert_eq!(vec.block_count(), 10);
    assert_eq!(vec.capacity(), 1_000_000);
    assert_eq!(vec[999_999], 999_999);
    assert_eq!(vec[0], 0);

    let mut drain = vec.drain();
    for expected in 0..100_000 {
        assert_eq!(drain.next(), Some(expected));
    }
    // Block 0's last element (index 99_999) has been visited; the block is
    // released on the crossing pull.
    assert_eq!(drain.next(), Some(100_000));

    let mut expected = 100_001usize;
    for value in drain {
        assert_eq!(value, expected);
        expected += 1;
    }
    assert_eq!(expected, 1_000_000);

    // Terminal released state: accessing the front is a checkable miss,
    // not a dangling read.
    assert_eq!(vec.get(0), None);
    assert_eq!(vec.live_blocks(), 0);
    assert_eq!(vec.memory_bytes(), 0);
}

#[test]
fn drain_memory_is_bounded_by_unvisited_suffix() {
    let block_capacity = 10_000;
    let block_bytes = block_capacity * std::mem::size_of::<usize>();
    let total_blocks = 10;

    // For each prefix of k whole blocks: consume it, stop, and check that
    // only the unvisited suffix is still resident.
    for finished in 1..=total_blocks {
        let mut vec = DrainVec::with_block_capacity(block_capacity);
        for i in 0..block_capacity * total_blocks {
            vec.push(i);
        }
        assert_eq!(vec.memory_bytes(), total_blocks * block_bytes);

        {
            let mut drain = vec.drain();
            for _ in 0..finished * block_capacity {
                drain.next().unwrap();
            }
        }
        assert_eq!(vec.live_blocks(), total_blocks - finished);
        assert_eq!(vec.memory_bytes(), (total_blocks - finished) * block_bytes);
    }
}

#[test]
fn lifecycle_empty_grow_drain_clear_regrow() {
    let mut vec: DrainVec<u64> = DrainVec::with_block_capacity(64);
    assert!(vec.is_empty());

    // Growing.
    vec.extend(0..1000);
    assert_eq!(vec.len(), 1000);

    // Iterable: repeatable non-destructive passes.
    assert_eq!(vec.iter().sum::<u64>(), 499_500);
    assert_eq!(vec.iter().sum::<u64>(), 499_500);

    // Draining.
    assert_eq!(vec.drain().sum::<u64>(), 499_500);

    // Released terminal state, then back to service.
    assert_eq!(vec.get(500), None);
    vec.clear();
    assert_eq!(vec.capacity(), 0);
    vec.push(7);
    assert_eq!(vec[0], 7);
}

#[test]
fn swap_then_snapshot_equality() {
    let mut a: DrainVec<i32> = (0..500).collect();
    let mut b: DrainVec<i32> = (1000..1010).collect();

    let snapshot_a: Vec<i32> = a.iter().copied().collect();
    let snapshot_b: Vec<i32> = b.iter().copied().collect();

    a.swap(&mut b);

    assert!(a.iter().copied().eq(snapshot_b));
    assert!(b.iter().copied().eq(snapshot_a));
}

#[test]
fn growing_resize_then_drain_sees_defaults_in_tail() {
    let mut vec: DrainVec<u32> = DrainVec::with_block_capacity(8);
    vec.extend([5, 6, 7]);
    vec.resize(20);

    let drained: Vec<u32> = vec.drain().collect();
    assert_eq!(&drained[..3], &[5, 6, 7]);
    assert!(drained[3..].iter().all(|&v| v == 0));
    assert_eq!(drained.len(), 20);
}

#[test]
fn shrinking_resize_discards_retained_range() {
    // Historical destructive-shrink contract: data below the new length is
    // not preserved either. Asserted here so a change shows up loudly.
    let mut vec: DrainVec<u32> = (1..=100).collect();
    vec.resize(10);
    assert_eq!(vec.len(), 10);
    for i in 0..10 {
        assert_eq!(vec[i], 0);
    }
}
