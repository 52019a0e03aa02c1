use alloc::boxed::Box;

/// An owning link to the next node, `None` at the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in a sorted linked list.
/// Each node is owned by its predecessor, or by the list for the head.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}
