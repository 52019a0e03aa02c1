use thiserror::Error;

/// Errors returned by [`SortedLinkedList`](super::list::SortedLinkedList).
///
/// A failed operation never modifies the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortedListError {
    /// An absent (`None`) value was passed where an element is required.
    #[error("absent value not allowed")]
    InvalidArgument,
    /// A positional access outside `0..len`.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
