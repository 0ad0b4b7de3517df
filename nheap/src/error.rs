use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NHeapError {
    #[error("branching factor must be an integer >= 1, got {0}")]
    InvalidArgument(String),
    #[error("heap is empty")]
    EmptyContainer,
    #[error("index {index} out of range for heap of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("new value at index {index} is smaller than the current one")]
    KeyNotIncreased { index: usize },
    #[error("could not reserve space for another element")]
    Allocation(#[from] std::collections::TryReserveError),
}

pub type Result<T> = std::result::Result<T, NHeapError>;

impl From<std::convert::Infallible> for NHeapError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
