//! # Sorted Linked List
//!
//! ## Core Components
//!
//! - [`traits`]: the [`Compare`](traits::Compare) strategy and the built-in
//!   [`Natural`](traits::Natural) and [`Reverse`](traits::Reverse) orders.
//! - [`list::SortedLinkedList`]: the container itself.
//! - [`iter`]: borrowing and owning iterators.
//! - [`error::SortedListError`]: errors returned by fallible operations.
//!
//! ## Ordering
//!
//! Only insertion consults the comparator. Lookup and removal match elements
//! with `PartialEq`, so a comparator that orders by one field may disagree
//! with equality over the whole value.

pub mod error;
pub mod iter;
pub mod list;
mod node;
pub mod traits;
