//! Behavioural tests for the public `NHeap` contract.

use nheap::{NHeap, NHeapError};

const SAMPLE: [i32; 7] = [5, 1, 9, 3, 7, 2, 8];

#[test]
fn drain_order_is_independent_of_branching_factor() {
    for n in [1, 2, 3, 5] {
        let mut heap = NHeap::new(n).unwrap();
        for v in SAMPLE {
            heap.insert(v);
            assert!(heap.is_heap(), "n={n}");
        }
        let mut out = Vec::new();
        while let Ok(v) = heap.extract_max() {
            out.push(v);
            assert!(heap.is_heap(), "n={n}");
        }
        assert_eq!(out, vec![9, 8, 7, 5, 3, 2, 1], "n={n}");
    }
}

#[test]
fn empty_heap_errors() {
    let mut heap: NHeap<i32> = NHeap::new(2).unwrap();
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.get_max(), Err(NHeapError::EmptyContainer));
    assert_eq!(heap.extract_max(), Err(NHeapError::EmptyContainer));
    assert_eq!(heap.size(), 0);
}

#[test]
fn single_element_round_trip() {
    let mut heap = NHeap::new(2).unwrap();
    heap.insert("only");
    assert_eq!(heap.extract_max(), Ok("only"));
    assert_eq!(heap.size(), 0);
}

#[test]
fn invalid_branching_factor() {
    assert!(matches!(
        NHeap::<i32>::new(0),
        Err(NHeapError::InvalidArgument(_))
    ));
    assert!(matches!(
        NHeap::<i32>::new(-1),
        Err(NHeapError::InvalidArgument(_))
    ));
    assert!(matches!(
        NHeap::<i32>::new(2.5),
        Err(NHeapError::InvalidArgument(_))
    ));
    assert!(matches!(
        NHeap::<i32>::from_unordered(0, vec![1, 2]),
        Err(NHeapError::InvalidArgument(_))
    ));
    assert!(NHeap::<i32>::new(2.0).is_ok());
}

#[test]
fn peek_is_idempotent() {
    let mut heap = NHeap::new(3).unwrap();
    heap.extend(SAMPLE);
    for _ in 0..5 {
        assert_eq!(heap.get_max(), Ok(&9));
        assert_eq!(heap.size(), SAMPLE.len());
    }
}

#[test]
fn size_tracks_inserts_and_extractions() {
    let mut heap = NHeap::new(4).unwrap();
    for i in 0..50 {
        heap.insert(i % 7);
    }
    for _ in 0..20 {
        heap.extract_max().unwrap();
    }
    assert_eq!(heap.size(), 30);
}

#[test]
fn prepopulated_store_is_kept_as_is() {
    let store = vec![9, 4, 8, 1, 2, 7];
    let heap = NHeap::with_store(2, store.clone()).unwrap();
    assert_eq!(heap.as_slice(), &store[..]);
    assert_eq!(heap.into_vec(), store);
}

#[test]
fn try_insert_behaves_like_insert() {
    let mut heap = NHeap::new(2).unwrap();
    for v in SAMPLE {
        heap.try_insert(v).unwrap();
    }
    assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 7, 8, 9]);
}
