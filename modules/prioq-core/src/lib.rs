//! prioq core library
//!
//! `no_std`-friendly priority-ordered collections.
//!
//! The central type is [`PriorityList`], a singly-linked list that keeps its entries sorted by
//! non-increasing priority and preserves insertion order among entries that share a priority.
//!
//! # Example Usage
//! ```
//! use prioq_core_rs::PriorityList;
//!
//! let mut list = PriorityList::new();
//! list.insert(0, "first node");
//! list.insert(5, "abc");
//!
//! assert_eq!(list.peek_head().map(|entry| entry.priority()), Some(5));
//! assert_eq!(list.size(), 2);
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::manual_assert)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::disallowed_types))]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Priority-ordered collection types.
pub mod collections;

pub use collections::{Entry, IntoIter, Iter, Priority, PriorityList, PriorityListError};
