//! A sorted singly linked list.
//!
//! The list owns its nodes and keeps them ordered on every insertion, either
//! by the elements' `Ord` implementation or by a comparator chosen when the
//! list is created. Elements that compare equal keep their insertion order.
//!
//! # Examples
//!
//! ```
//! use sorted_linked_list::{Reverse, Natural, SortedLinkedList, SortedListError};
//!
//! let mut list = SortedLinkedList::<i32>::new();
//! list.add(3)?;
//! list.add(1)?;
//! list.add(2)?;
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! assert_eq!(list.get(0), Ok(&1));
//! assert_eq!(list.index_of(&3), Some(2));
//!
//! assert_eq!(list.remove(&2), Ok(true));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//!
//! let mut words = SortedLinkedList::<&str, _>::with_comparator(Reverse(Natural));
//! words.add("a")?;
//! words.add("c")?;
//! words.add("b")?;
//! assert_eq!(words.to_string(), "[c, b, a]");
//!
//! assert_eq!(words.add(None::<&str>), Err(SortedListError::InvalidArgument));
//! # Ok::<(), SortedListError>(())
//! ```
pub mod sorted;
