use std::num::NonZeroUsize;

use log::debug;

use crate::error::NHeapError;

/// Number of children per node. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchingFactor(NonZeroUsize);

impl BranchingFactor {
    pub const BINARY: BranchingFactor = BranchingFactor(match NonZeroUsize::new(2) {
        Some(n) => n,
        None => unreachable!(),
    });

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BranchingFactor {
    fn default() -> Self {
        Self::BINARY
    }
}

fn rejected(shown: String) -> NHeapError {
    debug!("rejecting branching factor {}", shown);
    NHeapError::InvalidArgument(shown)
}

impl TryFrom<usize> for BranchingFactor {
    type Error = NHeapError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(n)
            .map(BranchingFactor)
            .ok_or_else(|| rejected(n.to_string()))
    }
}

impl TryFrom<u32> for BranchingFactor {
    type Error = NHeapError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        let n = usize::try_from(n).map_err(|_| rejected(n.to_string()))?;
        Self::try_from(n)
    }
}

impl TryFrom<i32> for BranchingFactor {
    type Error = NHeapError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(n))
    }
}

impl TryFrom<i64> for BranchingFactor {
    type Error = NHeapError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        let n = usize::try_from(n).map_err(|_| rejected(n.to_string()))?;
        Self::try_from(n)
    }
}

impl TryFrom<f64> for BranchingFactor {
    type Error = NHeapError;

    /// Accepts only finite integral values, so `3.0` is fine and `2.5` is not.
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if !n.is_finite() || n.fract() != 0.0 || n < 1.0 || n >= usize::MAX as f64 {
            return Err(rejected(n.to_string()));
        }
        Self::try_from(n as usize)
    }
}
