use alloc::vec::Vec;

/// Gives back memory after elements have been removed from `data`.
///
/// An emptied store is replaced by an unallocated one, and a store whose
/// capacity has reached twice its length is reallocated to fit, so a heap
/// never holds more than twice the memory its live elements need.
pub(super) fn shrink_after_removal<T>(data: &mut Vec<T>) {
    if data.is_empty() {
        *data = Vec::new();
    } else if data.capacity() / 2 >= data.len() {
        data.shrink_to_fit();
    }
}
