use core::cmp::Ordering;

/// A strategy for ordering the elements of a sorted list.
pub trait Compare<T: ?Sized> {
    /// Compare two elements, returning how `a` orders relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their `Ord` implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the order of the wrapped strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T, C> Compare<T> for Reverse<C>
where
    T: ?Sized,
    C: Compare<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
