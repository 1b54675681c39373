use thiserror::Error;

/// The error type for heap extraction operations.
///
/// Removing an absent key from a treap is an expected outcome and is reported through `Option`,
/// not through this enum.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// Returned when extracting or peeking the minimum of a heap with no elements.
    #[error("heap contains no elements")]
    Empty,
}
