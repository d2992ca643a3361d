use core::mem::ManuallyDrop;
use core::ptr;

/// A vacated slot in the heap's storage.
///
/// The element that used to live at `pos` is held in `elt` while other
/// elements are shifted into the gap one at a time; each shift costs a single
/// move rather than the two a swap would take. Dropping the `Hole` writes
/// `elt` into whatever slot the gap has reached, so the slice is whole again
/// even if a comparison panics part way through a sift.
pub(super) struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Vacates `data[pos]`.
    ///
    /// # Safety
    ///
    /// `pos` must be within `data`.
    #[inline]
    pub(super) unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: the caller guarantees pos is in bounds; the duplicate left
        //  behind is never read before it is overwritten.
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.data.len()
    }

    /// The element that was lifted out of the storage.
    #[inline]
    pub(super) fn element(&self) -> &T {
        &self.elt
    }

    /// # Safety
    ///
    /// `index` must be within the storage and must not be the hole itself.
    #[inline]
    pub(super) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Moves `data[index]` into the gap, leaving the gap at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the storage and must not be the hole itself.
    #[inline]
    pub(super) unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        // SAFETY: both indices are in bounds and distinct, so the regions do
        //  not overlap.
        unsafe {
            let base = self.data.as_mut_ptr();
            ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: pos is always in bounds and currently holds a stale
        //  duplicate, so overwriting it without dropping is correct.
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}
