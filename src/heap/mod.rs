//! A priority queue implemented with an implicit binary heap.
//!
//! Insertion has an expected cost of *O*(1) and removing the root costs
//! *O*(log(*n*)). Peeking at the root is *O*(1). Converting a vector into a
//! heap happens in place in *O*(*n*).
//!
//! Whether the least or the greatest element sits at the root is decided by
//! the heap's [`Polarity`] type parameter. How two elements compare is decided
//! by the family of methods used: the plain methods ([`push`], [`pop`],
//! [`filter`], [`from_vec`]) order elements with [`Ord`], while their
//! `*_with_comparator` counterparts use the element type's [`Comparable`]
//! implementation.
//!
//! [`push`]: Heap::push
//! [`pop`]: Heap::pop
//! [`filter`]: Heap::filter
//! [`from_vec`]: Heap::from_vec
//! [`Comparable`]: crate::Comparable

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::marker::PhantomData;
use core::ops::ControlFlow;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::order::{precedes, Attached, Comparable, Comparator, Min, Natural, Polarity};

mod filter;
mod hole;
mod resize;

use hole::Hole;


/// A min-heap or max-heap backed by a vector holding an implicit complete
/// binary tree.
///
/// The element at index `i` has its children at `2i + 1` and `2i + 2`, and no
/// child ever belongs nearer the root than its parent under the heap's
/// polarity `P`.
///
/// A heap starts out without any allocation and returns to that state whenever
/// it is emptied. As elements are removed the storage is periodically
/// reallocated, so its capacity stays below twice its length.
///
/// Each heap must be driven through one ordering: either the [`Ord`]-based
/// methods or the `*_with_comparator` methods. It is a logic error to mix the
/// two on the same heap when they disagree, or for an element to change its
/// ordering while it is in the heap. The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the `Heap` that
/// observed it: elements are neither lost nor duplicated.
///
/// `Heap` is not [`Copy`]. Duplicating one requires an explicit call to
/// [`Clone::clone`], which gives the copy its own storage:
///
/// ```compile_fail
/// use polarheap::{Heap, Min};
///
/// let mut a = Heap::<i32, Min>::new();
/// a.push(1);
/// let b = a;
/// a.push(2); // `a` has been moved into `b`
/// ```
///
/// # Examples
///
/// ```
/// use polarheap::{Heap, Max, Min};
///
/// let mut heap = Heap::<i32, Max>::new();
/// assert_eq!(heap.peek(), None);
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&5));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// assert_eq!(heap.capacity(), 0);
///
/// let heap: Heap<i32, Min> = Heap::from([3, 1, 2]);
/// assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek] | [filter]          | [from_vec] |
/// |---------|---------------|--------|-------------------|------------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) | *O*(*n* log(*n*)) | *O*(*n*)   |
///
/// [push]: Heap::push
/// [pop]: Heap::pop
/// [peek]: Heap::peek
/// [filter]: Heap::filter
/// [from_vec]: Heap::from_vec
pub struct Heap<T, P = Min> {
    data: Vec<T>,
    polarity: PhantomData<P>,
}

impl<T: Clone, P> Clone for Heap<T, P> {
    /// Copies every element into freshly allocated storage of exactly the
    /// required length. The two heaps share nothing afterwards.
    fn clone(&self) -> Self {
        Heap { data: self.data.clone(), polarity: PhantomData }
    }
}

impl<T, P> Default for Heap<T, P> {
    /// Creates an empty `Heap<T, P>`.
    #[inline]
    fn default() -> Heap<T, P> {
        Heap::new()
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Heap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P> Heap<T, P> {
    /// Creates an empty heap. This does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    /// let mut heap = Heap::<u8, Min>::new();
    /// assert_eq!(heap.capacity(), 0);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub const fn new() -> Heap<T, P> {
        Heap { data: Vec::new(), polarity: PhantomData }
    }

    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    /// let heap: Heap<i32, Min> = Heap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the heap can hold without reallocating.
    ///
    /// This is always `0` for an empty heap, and less than twice the length
    /// after any removal.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the root of the heap (its least element for a [`Min`] heap,
    /// its greatest for a [`Max`](crate::Max) heap), or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    /// let mut heap = Heap::<i32, Min>::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(5);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Drops every element and releases the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    /// let mut heap: Heap<i32, Min> = Heap::from([1, 3]);
    ///
    /// heap.clear();
    ///
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    /// Returns an iterator visiting all elements in storage order, which is
    /// the level order of the implicit tree rather than sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the storage as a slice, in level order.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    /// let mut heap = Heap::<i32, Min>::new();
    /// for x in [4, 2, 3, 1] {
    ///     heap.push(x);
    /// }
    ///
    /// assert_eq!(heap.as_slice(), [1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the heap and returns its storage in level order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }
}

impl<T: Ord, P: Polarity> Heap<T, P> {
    /// Builds a heap out of `vec`, reusing it as the storage.
    ///
    /// The heap is arranged bottom-up, which takes *O*(*n*) comparisons
    /// rather than the *O*(*n* log(*n*)) of pushing every element in turn.
    /// An empty vector yields an unallocated heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Max};
    ///
    /// let mut heap = Heap::<i32, Max>::from_vec(vec![3, 9, -1, 4]);
    /// assert_eq!(heap.pop(), Some(9));
    /// assert_eq!(heap.pop(), Some(4));
    /// ```
    #[must_use]
    pub fn from_vec(vec: Vec<T>) -> Heap<T, P> {
        Heap::from_vec_by::<Natural>(vec)
    }

    /// Pushes an element onto the heap.
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed and over a sufficiently large number of
    /// pushes, is *O*(1). Elements pushed in an order that keeps beating the
    /// root (ascending into a [`Max`](crate::Max) heap, say) degrade this to
    /// *O*(log(*n*)) each. A single push may also pay *O*(*n*) to grow the
    /// storage; that cost is amortized in the figures above.
    pub fn push(&mut self, item: T) {
        self.push_by::<Natural>(item)
    }

    /// Removes the root of the heap and returns it, or `None` if the heap is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    /// let mut heap: Heap<i32, Min> = Heap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        self.pop_by::<Natural>()
    }

    /// Visits the elements in storage order, removing those for which `f`
    /// returns `false` as the first tuple field.
    ///
    /// Returning [`ControlFlow::Break`] stops the visit: the current element
    /// is kept or removed according to its own verdict and every element not
    /// yet visited is removed.
    ///
    /// Elements ahead of the first removal stay where they are; the survivors
    /// from that point on are sifted back into place one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use polarheap::{Heap, Max};
    ///
    /// let mut heap: Heap<i32, Max> = (1..=14).collect();
    /// heap.filter(|x| (x % 7 == 0, ControlFlow::Continue(())));
    ///
    /// assert_eq!(heap.into_sorted_vec(), [14, 7]);
    /// ```
    pub fn filter<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> (bool, ControlFlow<()>),
    {
        self.filter_by::<Natural, F>(f)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns
    /// `false`. The elements are visited in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use polarheap::{Heap, Min};
    ///
    /// let mut heap: Heap<i32, Min> = Heap::from([-10, -5, 1, 2, 4, 13]);
    ///
    /// heap.retain(|x| x % 2 == 0); // only keep even numbers
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4])
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.filter(|e| (f(e), ControlFlow::Continue(())))
    }

    /// Consumes the heap and returns its elements in the order [`pop`] would
    /// have yielded them: ascending for a [`Min`] heap, descending for a
    /// [`Max`](crate::Max) heap.
    ///
    /// [`pop`]: Heap::pop
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_sorted_vec_by::<Natural>()
    }
}

impl<T: Comparable, P: Polarity> Heap<T, P> {
    /// As [`from_vec`](Heap::from_vec), ordering elements with
    /// [`Comparable`].
    #[must_use]
    pub fn from_vec_with_comparator(vec: Vec<T>) -> Heap<T, P> {
        Heap::from_vec_by::<Attached>(vec)
    }

    /// As [`push`](Heap::push), ordering elements with [`Comparable`].
    pub fn push_with_comparator(&mut self, item: T) {
        self.push_by::<Attached>(item)
    }

    /// As [`pop`](Heap::pop), ordering elements with [`Comparable`].
    pub fn pop_with_comparator(&mut self) -> Option<T> {
        self.pop_by::<Attached>()
    }

    /// As [`filter`](Heap::filter), ordering elements with [`Comparable`].
    pub fn filter_with_comparator<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> (bool, ControlFlow<()>),
    {
        self.filter_by::<Attached, F>(f)
    }

    /// As [`retain`](Heap::retain), ordering elements with [`Comparable`].
    pub fn retain_with_comparator<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.filter_with_comparator(|e| (f(e), ControlFlow::Continue(())))
    }

    /// As [`into_sorted_vec`](Heap::into_sorted_vec), ordering elements with
    /// [`Comparable`].
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec_with_comparator(self) -> Vec<T> {
        self.into_sorted_vec_by::<Attached>()
    }
}

impl<T, P: Polarity> Heap<T, P> {
    fn from_vec_by<C: Comparator<T>>(vec: Vec<T>) -> Heap<T, P> {
        let mut heap = Heap { data: vec, polarity: PhantomData };
        if heap.data.is_empty() {
            heap.data = Vec::new();
        }
        heap.rebuild::<C>();
        heap
    }

    fn push_by<C: Comparator<T>>(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up::<C>(old_len) };
    }

    fn pop_by<C: Comparator<T>>(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: the heap is not empty.
        let pos = unsafe { self.sink_root_to_leaf::<C>() };

        // The old root now sits at `pos`. Unless that is the last slot, the
        // last element takes its place and has to bubble up from there.
        let item = self.data.swap_remove(pos);
        if pos < self.len() {
            // SAFETY: checked just above.
            unsafe { self.sift_up::<C>(pos) };
        }

        resize::shrink_after_removal(&mut self.data);
        Some(item)
    }

    fn into_sorted_vec_by<C: Comparator<T>>(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: 0 < 1 <= end < self.len()
            unsafe { self.sift_down_range::<C>(0, end) };
        }
        // Each root was parked at the back, so the storage now runs in
        // reverse pop order.
        self.data.reverse();
        self.into_vec()
    }

    // Sifting moves elements through a `Hole` rather than swapping them: the
    // element being placed is lifted out once, the others shift into the gap
    // with one move each, and the gap is refilled when the `Hole` drops, even
    // on panic.

    /// Moves the element at `pos` towards the root while it strictly
    /// precedes its parent.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up<C: Comparator<T>>(&mut self, pos: usize) {
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > 0, so parent < hole.pos() is a valid index
            //  distinct from the hole.
            if !precedes::<T, P, C>(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }
    }

    /// Lifts out the root and walks the resulting hole down to a leaf,
    /// promoting the better child at every level. The right child is promoted
    /// unless the left one strictly precedes it, since the right subtree is
    /// never the deeper one. The old root is dropped back in at the leaf,
    /// whose index is returned.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the heap is not empty.
    unsafe fn sink_root_to_leaf<C: Comparator<T>>(&mut self) -> usize {
        // SAFETY: the caller guarantees that 0 < self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, 0) };
        let end = hole.len();
        let mut child = 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // SAFETY: child < end - 1 < self.len() and child + 1 < end, and
            //  neither is the hole.
            child += unsafe { !precedes::<T, P, C>(hole.get(child), hole.get(child + 1)) } as usize;

            // SAFETY: child is one of the two indices proven valid above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        if child == end - 1 {
            // SAFETY: child == end - 1 < self.len(), and it is a child of the
            //  hole so it cannot be the hole.
            unsafe { hole.move_to(child) };
        }

        hole.pos()
    }

    /// Moves the element at `pos` away from the root, within
    /// `data[..end]`, while some child strictly precedes it.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range<C: Comparator<T>>(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data[..end], pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // SAFETY: child < end - 1 and child + 1 < end, and neither is
            //  the hole.
            child += unsafe { !precedes::<T, P, C>(hole.get(child), hole.get(child + 1)) } as usize;

            // SAFETY: child is one of the two indices proven valid above.
            if !precedes::<T, P, C>(unsafe { hole.get(child) }, hole.element()) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // SAFETY: && short circuits, so child == end - 1 < self.len() when
        //  the second operand is evaluated.
        if child == end - 1 && precedes::<T, P, C>(unsafe { hole.get(child) }, hole.element()) {
            // SAFETY: child is a valid index distinct from the hole.
            unsafe { hole.move_to(child) };
        }
    }

    /// Bottom-up heapify of the whole storage.
    fn rebuild<C: Comparator<T>>(&mut self) {
        let len = self.len();
        let mut n = len / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n < len / 2 <= len.
            unsafe { self.sift_down_range::<C>(n, len) };
        }
    }
}

/// An iterator over the elements of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::into_iter()`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Ord, P: Polarity> From<Vec<T>> for Heap<T, P> {
    /// Converts a `Vec<T>` into a `Heap<T, P>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Heap<T, P> {
        Heap::from_vec(vec)
    }
}

impl<T: Ord, P: Polarity, const N: usize> From<[T; N]> for Heap<T, P> {
    /// ```
    /// use polarheap::{Heap, Min};
    ///
    /// let mut h1: Heap<_, Min> = Heap::from([1, 4, 2, 3]);
    /// let mut h2: Heap<_, Min> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, P> From<Heap<T, P>> for Vec<T> {
    /// Converts a `Heap<T, P>` into a `Vec<T>` in storage order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: Heap<T, P>) -> Vec<T> {
        heap.data
    }
}

impl<T: Ord, P: Polarity> FromIterator<T> for Heap<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T, P> {
        Heap::from_vec(iter.into_iter().collect())
    }
}

impl<T, P> IntoIterator for Heap<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator that moves each value out of the heap in
    /// storage order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, P> IntoIterator for &'a Heap<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord, P: Polarity> Extend<T> for Heap<T, P> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.data.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }
}

impl<'a, T: 'a + Ord + Copy, P: Polarity> Extend<&'a T> for Heap<T, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }
}
