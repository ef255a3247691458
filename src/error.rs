use core::fmt;

/// Errors that can be caused while using a [`MinHeap`](crate::MinHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Caused when reading or removing the root of a heap that holds no elements.
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => write!(f, "attempted to access the root of an empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Generic `Result` type for `MinHeap` methods.
pub type Result<T> = std::result::Result<T, HeapError>;
