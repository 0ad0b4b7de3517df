use std::iter::FusedIterator;
use std::ops::Range;

use log::trace;

use crate::branching::BranchingFactor;
use crate::error::{NHeapError, Result};

/// A max-heap where every node has up to `n` children, stored flat in a `Vec`.
///
/// Node `i` has its parent at `(i - 1) / n` and its children at
/// `i * n + 1 ..= i * n + n`. Every mutation takes `&mut self`; see
/// [`SharedNHeap`](crate::SharedNHeap) for use across threads.
///
/// | Operation          | Complexity               |
/// |--------------------|--------------------------|
/// | `get_max`          | O(1)                     |
/// | `insert`           | O(log_n(size))           |
/// | `increase_key`     | O(log_n(size))           |
/// | `extract_max`      | O(n * log_n(size))       |
/// | `from_unordered`   | O(size)                  |
#[derive(Debug, Clone)]
pub struct NHeap<T: Ord> {
    n: usize,
    data: Vec<T>,
}

impl<T: Ord> NHeap<T> {
    pub fn new<N>(n: N) -> Result<Self>
    where
        N: TryInto<BranchingFactor>,
        NHeapError: From<N::Error>,
    {
        Self::with_store(n, Vec::new())
    }

    pub fn with_capacity<N>(n: N, cap: usize) -> Result<Self>
    where
        N: TryInto<BranchingFactor>,
        NHeapError: From<N::Error>,
    {
        Self::with_store(n, Vec::with_capacity(cap))
    }

    /// Wraps an existing store without reordering it.
    ///
    /// A non-empty `store` must already be a valid max-heap for branching
    /// factor `n`; this is only checked in debug builds. Use
    /// [`NHeap::from_unordered`] for arbitrary input.
    pub fn with_store<N>(n: N, store: Vec<T>) -> Result<Self>
    where
        N: TryInto<BranchingFactor>,
        NHeapError: From<N::Error>,
    {
        let heap = NHeap {
            n: n.try_into()?.get(),
            data: store,
        };
        debug_assert!(heap.is_heap(), "initial store is not a valid heap");
        Ok(heap)
    }

    /// Builds a heap from arbitrary values by sifting down every internal
    /// node, last one first.
    pub fn from_unordered<N>(n: N, vec: Vec<T>) -> Result<Self>
    where
        N: TryInto<BranchingFactor>,
        NHeapError: From<N::Error>,
    {
        let mut h = NHeap {
            n: n.try_into()?.get(),
            data: vec,
        };
        if h.data.len() > 1 {
            let last_parent = h.parent_index(h.data.len() - 1);
            trace!(
                "building {}-ary heap of {} elements from {} internal nodes",
                h.n,
                h.data.len(),
                last_parent + 1
            );
            for i in (0..=last_parent).rev() {
                h.bubble_down(i);
            }
        }
        Ok(h)
    }

    pub fn branching_factor(&self) -> usize {
        self.n
    }

    /// Index of the parent of `index`. The root maps to itself.
    pub fn parent_index(&self, index: usize) -> usize {
        index.saturating_sub(1) / self.n
    }

    /// Indices of the children of `index` that exist in the heap, in order.
    /// Empty for a leaf.
    pub fn children_indices(&self, index: usize) -> Range<usize> {
        let first = index.saturating_mul(self.n).saturating_add(1);
        let end = first.saturating_add(self.n).min(self.data.len());
        first.min(end)..end
    }

    /// Restores the heap property after the value at `index` grew.
    ///
    /// Only the path from `index` to the root may be out of order.
    pub fn increase_key(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.bubble_up(index);
        Ok(())
    }

    /// Replaces the value at `index` with a value at least as large and
    /// moves it up to its place.
    pub fn increase_key_to(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        if value < self.data[index] {
            return Err(NHeapError::KeyNotIncreased { index });
        }
        self.data[index] = value;
        self.bubble_up(index);
        Ok(())
    }

    pub fn get_max(&self) -> Result<&T> {
        self.data.first().ok_or(NHeapError::EmptyContainer)
    }

    pub fn extract_max(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(NHeapError::EmptyContainer);
        }
        // last element takes the root slot
        let ret = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.bubble_down(0);
        }
        Ok(ret)
    }

    pub fn insert(&mut self, val: T) {
        self.data.push(val);
        self.bubble_up(self.data.len() - 1);
    }

    /// Like [`NHeap::insert`] but reports allocation failure instead of aborting.
    pub fn try_insert(&mut self, val: T) -> Result<()> {
        self.data.try_reserve(1)?;
        self.insert(val);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if every node is `>=` each of its children.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[self.parent_index(i)] >= self.data[i])
    }

    /// The backing store in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        out.extend(self.drain_max());
        out.reverse();
        out
    }

    /// Removes values largest first, one per call to `next`. Values not yet
    /// yielded stay in the heap if the iterator is dropped early.
    pub fn drain_max(&mut self) -> DrainMax<'_, T> {
        DrainMax { heap: self }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(NHeapError::IndexOutOfRange {
                index,
                size: self.data.len(),
            })
        }
    }

    fn bubble_up(&mut self, mut i: usize) {
        while i > 0 {
            let pi = self.parent_index(i);
            if self.data[pi] >= self.data[i] {
                break;
            }
            self.data.swap(i, pi);
            i = pi;
        }
    }

    /// Largest child of `i`; among equal children the last one wins.
    fn highest_priority_child(&self, i: usize) -> Option<usize> {
        let mut ret: Option<usize> = None;
        for ci in self.children_indices(i) {
            match ret {
                Some(best) if self.data[ci] < self.data[best] => {}
                _ => ret = Some(ci),
            }
        }
        ret
    }

    fn bubble_down(&mut self, mut i: usize) {
        while let Some(ci) = self.highest_priority_child(i) {
            if self.data[i] >= self.data[ci] {
                break;
            }
            self.data.swap(i, ci);
            i = ci;
        }
    }
}

impl<T: Ord> Default for NHeap<T> {
    fn default() -> Self {
        NHeap {
            n: BranchingFactor::default().get(),
            data: Vec::new(),
        }
    }
}

impl<T: Ord> Extend<T> for NHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for val in iter {
            self.insert(val);
        }
    }
}

impl<T: Ord> IntoIterator for NHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields values largest first.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { heap: self }
    }
}

pub struct DrainMax<'a, T: Ord> {
    heap: &'a mut NHeap<T>,
}

impl<T: Ord> Iterator for DrainMax<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.size(), Some(self.heap.size()))
    }
}

impl<T: Ord> ExactSizeIterator for DrainMax<'_, T> {}
impl<T: Ord> FusedIterator for DrainMax<'_, T> {}

pub struct IntoIter<T: Ord> {
    heap: NHeap<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.size(), Some(self.heap.size()))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}
impl<T: Ord> FusedIterator for IntoIter<T> {}
