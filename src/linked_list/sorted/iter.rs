use core::iter::FusedIterator;

use super::{list::SortedLinkedList, node::Node};

/// An iterator over the elements of a sorted list, smallest first.
///
/// Each call to [`SortedLinkedList::iter`] starts a new traversal from the
/// head. The list cannot be modified while the iterator is alive.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            self.current = current.next.as_deref();
            self.remaining -= 1;
            &current.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator that drains a sorted list in order.
pub struct IntoIter<T, C> {
    list: SortedLinkedList<T, C>,
}

impl<T, C> IntoIter<T, C> {
    pub(crate) fn new(list: SortedLinkedList<T, C>) -> Self {
        Self { list }
    }
}

impl<T, C> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, C> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C> FusedIterator for IntoIter<T, C> {}
