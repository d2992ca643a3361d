//! Ordering strategies for [`Heap`][crate::Heap].
//!
//! An ordering has two independent halves:
//!
//! * a [`Polarity`], chosen by a zero-sized marker type ([`Min`] or [`Max`])
//!   that is fixed for the whole life of a heap; and
//! * a raw three-way comparison between two elements, obtained either from the
//!   element type's [`Ord`] implementation or from its [`Comparable`]
//!   implementation, depending on which family of heap methods the caller uses.

use alloc::{boxed::Box, rc::Rc, sync::Arc};
use core::cmp::{Ordering, Reverse};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Min {}
    impl Sealed for super::Max {}
}

/// Selects whether smaller or larger elements rise towards the root of a heap.
///
/// This trait is sealed: [`Min`] and [`Max`] are its only implementations.
pub trait Polarity: sealed::Sealed {
    /// `1` for a min-heap, `-1` for a max-heap.
    const SIGN: i8;

    /// Adjusts a raw comparison so that [`Ordering::Less`] always means
    /// "belongs nearer the root".
    #[inline]
    fn orient(ordering: Ordering) -> Ordering {
        if Self::SIGN < 0 {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Polarity marker for a min-heap: the least element is at the root.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Min;

/// Polarity marker for a max-heap: the greatest element is at the root.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Max;

impl Polarity for Min {
    const SIGN: i8 = 1;
}

impl Polarity for Max {
    const SIGN: i8 = -1;
}

/// A total order attached to an element type.
///
/// Implement this for element types that either have no [`Ord`]
/// implementation, or whose heap ordering should differ from it, and then use
/// the `*_with_comparator` methods of [`Heap`][crate::Heap].
///
/// A type has exactly one `Comparable` implementation, so every heap of that
/// type agrees on how its elements are ordered. When the same data needs a
/// second ordering, wrap it in a distinct type that implements `Comparable`
/// differently. [`Reverse`] is such a wrapper: it flips the ordering of the
/// type it wraps.
///
/// It is a logic error for `compare` not to be a total order. The behavior
/// resulting from such a logic error is not specified, but will be
/// encapsulated to the heap that observed it.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use polarheap::{Comparable, Heap, Min};
///
/// struct Task {
///     deadline: u32,
///     name: &'static str,
/// }
///
/// impl Comparable for Task {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.deadline.cmp(&other.deadline)
///     }
/// }
///
/// let mut heap = Heap::<Task, Min>::new();
/// heap.push_with_comparator(Task { deadline: 9, name: "later" });
/// heap.push_with_comparator(Task { deadline: 2, name: "soon" });
///
/// assert_eq!(heap.pop_with_comparator().map(|t| t.name), Some("soon"));
/// ```
pub trait Comparable {
    /// Returns how `self` orders relative to `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! forward_comparable {
    () => {};

    ($({$($g:tt)+})? $t:ty $(, $($rest:tt)*)?) => {
        impl$(<$($g)+>)? Comparable for $t {
            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                (**self).compare(&**other)
            }
        }

        $(forward_comparable!($($rest)*);)?
    };
}

forward_comparable! {
    {T: ?Sized + Comparable} &T,
    {T: ?Sized + Comparable} &mut T,
    {T: ?Sized + Comparable} Box<T>,
    {T: ?Sized + Comparable} Rc<T>,
    {T: ?Sized + Comparable} Arc<T>,
}

impl<T: Comparable> Comparable for Reverse<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}

/// Source of the raw comparison used by the heap algorithms.
pub(crate) trait Comparator<T: ?Sized> {
    fn compare(this: &T, that: &T) -> Ordering;
}

/// Delegates to `T`'s [`Ord`] implementation.
pub(crate) enum Natural {}

/// Delegates to `T`'s [`Comparable`] implementation.
pub(crate) enum Attached {}

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }
}

impl<T: ?Sized + Comparable> Comparator<T> for Attached {
    #[inline]
    fn compare(this: &T, that: &T) -> Ordering {
        this.compare(that)
    }
}

/// Whether `this` belongs strictly nearer the root than `that`.
#[inline]
pub(crate) fn precedes<T: ?Sized, P: Polarity, C: Comparator<T>>(this: &T, that: &T) -> bool {
    P::orient(C::compare(this, that)) == Ordering::Less
}
