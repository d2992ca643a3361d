//! An implicit binary heap whose polarity is part of its type.
//!
//! [`Heap<T, Min>`] keeps its least element at the root and [`Heap<T, Max>`]
//! its greatest. Elements are ordered either by [`Ord`] (the plain methods) or
//! by a [`Comparable`] implementation on the element type (the
//! `*_with_comparator` methods).
//!
//! ```
//! use polarheap::{Heap, Max, Min};
//!
//! let mut lows = Heap::<i32, Min>::new();
//! let mut highs = Heap::<i32, Max>::new();
//! for x in [1, 5, 2, 9, -3, 17, 18, 19, 14] {
//!     lows.push(x);
//!     highs.push(x);
//! }
//!
//! assert_eq!(lows.pop(), Some(-3));
//! assert_eq!(highs.pop(), Some(19));
//! ```
//!
//! The crate is `no_std` unless the `std` feature is enabled; it only needs
//! `alloc`.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
// linting controls
#![cfg_attr(test, allow(unstable_name_collisions, clippy::useless_vec))]

extern crate alloc;

mod heap;
mod order;
#[allow(dead_code)] // Not used in all configurations
mod polyfill;

pub use heap::{Heap, IntoIter, Iter};
pub use order::{Comparable, Max, Min, Polarity};
