use log::trace;

use crate::entry::Prioritized;
use crate::heap::MaxHeap;
use crate::sift::{build_heap_by, sift_down_by};

/// Sorts `data` ascending in place.
///
/// Builds a max-heap over the whole slice, then repeatedly swaps the root to the
/// shrinking boundary and sifts the new root down. O(n log n), no allocation.
///
/// Elements that cannot be compared (such as NaN) never count as greater than
/// anything, so the sort still terminates, but where they end up is unspecified and
/// they may leave their neighbours out of order.
pub fn heapsort_array<T: PartialOrd>(data: &mut [T]) {
    heapsort_array_by(data, |a, b| a > b);
}

/// Like [`heapsort_array`], ordering by a custom "greater than" predicate.
///
/// Elements end up in ascending order with respect to `is_greater`; passing
/// `|a, b| a < b` sorts descending. The result is only fully ordered when
/// `is_greater` is a strict weak ordering over `data`; otherwise the output is a
/// permutation of the input in unspecified order.
pub fn heapsort_array_by<T, F>(data: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    build_heap_by(data, &mut is_greater);

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down_by(data, 0, end, &mut is_greater);
        end -= 1;
    }
}

/// Sorts entries by descending priority through a [`MaxHeap`].
///
/// Entries with equal priority come out in the order the heap yields them, which
/// is not necessarily their input order.
pub fn heapsort_entries<E, I>(entries: I) -> Vec<E>
where
    E: Prioritized,
    I: IntoIterator<Item = E>,
{
    let heap = entries.into_iter().collect::<MaxHeap<E>>();
    trace!("heapsort_entries: draining {} entries", heap.len());
    heap.into_sorted_vec()
}
