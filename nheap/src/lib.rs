//! An n-ary max-heap over a `Vec`, with the branching factor chosen at runtime.
//!
//! ```rust
//! use nheap::NHeap;
//!
//! let mut heap = NHeap::new(3)?;
//! for v in [5, 1, 9, 3] {
//!     heap.insert(v);
//! }
//! assert_eq!(heap.get_max()?, &9);
//! assert_eq!(heap.extract_max()?, 9);
//! assert_eq!(heap.size(), 3);
//! # Ok::<(), nheap::NHeapError>(())
//! ```

pub mod branching;
pub mod error;
pub mod nheap;
pub mod shared;

pub use branching::BranchingFactor;
pub use error::{NHeapError, Result};
pub use nheap::NHeap;
pub use shared::SharedNHeap;
