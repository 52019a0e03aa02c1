use core::{cmp::Ordering, fmt};

use super::{
    error::SortedListError,
    iter::{IntoIter, Iter},
    node::{Link, Node},
    traits::{Compare, Natural},
};

/// A singly linked list that keeps its elements sorted.
///
/// The order is decided by the comparator `C`, fixed at construction. Elements
/// that compare equal stay in insertion order.
pub struct SortedLinkedList<T, C = Natural> {
    head: Link<T>,
    len: usize,
    comparator: C,
}

impl<T> SortedLinkedList<T, Natural>
where
    T: Ord,
{
    /// Creates an empty list ordered by the elements' `Ord` implementation.
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> SortedLinkedList<T, C> {
    /// Creates an empty list ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> Self {
        SortedLinkedList {
            head: None,
            len: 0,
            comparator,
        }
    }

    /// The comparator this list was created with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        // Unlink node by node so dropping a long chain does not recurse.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
        tracing::trace!(len = self.len, "cleared sorted list");
    }

    /// Returns the element at `index`, counting from the smallest.
    ///
    /// Walks the chain from the head, so this is linear in `index`.
    pub fn get(&self, index: usize) -> Result<&T, SortedListError> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "index out of bounds");
            return Err(SortedListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.iter()
            .nth(index)
            .ok_or(SortedListError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// The largest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a fresh iterator over the elements in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }
}

impl<T, C> SortedLinkedList<T, C>
where
    T: PartialEq,
{
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|current| current == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `Ok(false)` if no element matches. An empty list returns
    /// `Ok(false)` without looking at `value`; otherwise an absent value is
    /// rejected with [`SortedListError::InvalidArgument`].
    pub fn remove<'a, V>(&mut self, value: V) -> Result<bool, SortedListError>
    where
        V: Into<Option<&'a T>>,
        T: 'a,
    {
        if self.is_empty() {
            return Ok(false);
        }
        let Some(value) = value.into() else {
            tracing::debug!("rejected absent value on remove");
            return Err(SortedListError::InvalidArgument);
        };

        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != *value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                self.len -= 1;
                tracing::trace!(len = self.len, "removed element");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T, C> SortedLinkedList<T, C>
where
    C: Compare<T>,
{
    /// Adds `value` in sorted position.
    ///
    /// An absent value is rejected with [`SortedListError::InvalidArgument`]
    /// and the list is left unchanged.
    pub fn add<V>(&mut self, value: V) -> Result<(), SortedListError>
    where
        V: Into<Option<T>>,
    {
        match value.into() {
            Some(value) => {
                self.insert(value);
                Ok(())
            }
            None => {
                tracing::debug!("rejected absent value on add");
                Err(SortedListError::InvalidArgument)
            }
        }
    }

    /// Inserts `value` after every element that does not compare greater
    /// than it, and before the first one that does.
    pub fn insert(&mut self, value: T) {
        let comparator = &self.comparator;
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| Self::compare(comparator, &node.value, &value).is_le())
        {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let next = cursor.take();
        *cursor = Some(Node::new(value, next));
        self.len += 1;
        tracing::trace!(len = self.len, "inserted element");
    }

    fn compare(comparator: &C, a: &T, b: &T) -> Ordering {
        comparator.compare(a, b)
    }
}

impl<T, C> Default for SortedLinkedList<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Clone for SortedLinkedList<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        let mut head = None;
        let mut tail = &mut head;
        for value in self.iter() {
            tail = &mut tail.insert(Node::new(value.clone(), None)).next;
        }
        SortedLinkedList {
            head,
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C> Drop for SortedLinkedList<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedLinkedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for SortedLinkedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T, C> IntoIterator for &'a SortedLinkedList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for SortedLinkedList<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
