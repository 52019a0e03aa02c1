#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::sorted::{
    error::SortedListError,
    iter::{IntoIter, Iter},
    list::SortedLinkedList,
    traits::{Compare, Natural, Reverse},
};
