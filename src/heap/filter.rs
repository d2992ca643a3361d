use core::marker::PhantomData;
use core::ops::ControlFlow;

use super::{resize, Heap};
use crate::order::{Comparator, Polarity};

/// Finishes a filter pass, whether it ran to completion or a predicate
/// unwound out of it.
///
/// While the pass runs the storage is laid out as
/// `[kept | removed | not yet visited]`, with `kept` and `visited` marking the
/// two boundaries. Dropping the guard discards the removed middle, repairs the
/// heap from the first slot that lost its original occupant, and applies the
/// shrink policy.
struct CompactOnDrop<'a, T, P: Polarity, C: Comparator<T>> {
    heap: &'a mut Heap<T, P>,
    kept: usize,
    visited: usize,
    first_removed: Option<usize>,
    comparator: PhantomData<C>,
}

impl<T, P: Polarity, C: Comparator<T>> Drop for CompactOnDrop<'_, T, P, C> {
    fn drop(&mut self) {
        let removed = self.visited - self.kept;
        if removed == 0 {
            return;
        }
        self.heap.data.drain(self.kept..self.visited);

        // data[..first] is exactly what it was before the pass, so it is
        // still a heap; everything after it is pushed back in order.
        let first = self.first_removed.unwrap_or(self.kept);
        for i in first..self.heap.len() {
            // SAFETY: i < self.heap.len()
            unsafe { self.heap.sift_up::<C>(i) };
        }

        resize::shrink_after_removal(&mut self.heap.data);
    }
}

impl<T, P: Polarity> Heap<T, P> {
    pub(super) fn filter_by<C, F>(&mut self, mut f: F)
    where
        C: Comparator<T>,
        F: FnMut(&T) -> (bool, ControlFlow<()>),
    {
        let len = self.len();
        let mut guard = CompactOnDrop::<T, P, C> {
            heap: self,
            kept: 0,
            visited: 0,
            first_removed: None,
            comparator: PhantomData,
        };

        while guard.visited < len {
            let index = guard.visited;
            let (keep, flow) = f(&guard.heap.data[index]);
            guard.visited += 1;

            if keep {
                guard.heap.data.swap(guard.kept, index);
                guard.kept += 1;
            } else if guard.first_removed.is_none() {
                guard.first_removed = Some(guard.kept);
            }

            if flow.is_break() {
                // Everything not yet visited goes with the removed elements.
                guard.visited = len;
                break;
            }
        }
    }
}
