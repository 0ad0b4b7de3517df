use parking_lot::{Condvar, Mutex};

use crate::error::Result;
use crate::nheap::NHeap;

/// An [`NHeap`] behind a single lock, for sharing between threads.
///
/// Every operation holds the lock for its whole duration, so the heap
/// property is never observed broken.
#[derive(Debug)]
pub struct SharedNHeap<T: Ord> {
    heap: Mutex<NHeap<T>>,
    not_empty: Condvar,
}

impl<T: Ord> SharedNHeap<T> {
    pub fn new(heap: NHeap<T>) -> Self {
        SharedNHeap {
            heap: Mutex::new(heap),
            not_empty: Condvar::new(),
        }
    }

    pub fn insert(&self, val: T) {
        self.heap.lock().insert(val);
        self.not_empty.notify_one();
    }

    /// Fails with `EmptyContainer` instead of waiting.
    pub fn extract_max(&self) -> Result<T> {
        self.heap.lock().extract_max()
    }

    /// Waits until an element is available and removes the maximum.
    pub fn extract_max_blocking(&self) -> T {
        let mut guard = self.heap.lock();
        loop {
            if let Ok(val) = guard.extract_max() {
                return val;
            }
            self.not_empty.wait(&mut guard);
        }
    }

    pub fn get_max(&self) -> Result<T>
    where
        T: Clone,
    {
        self.heap.lock().get_max().cloned()
    }

    pub fn size(&self) -> usize {
        self.heap.lock().size()
    }

    pub fn into_inner(self) -> NHeap<T> {
        self.heap.into_inner()
    }
}
