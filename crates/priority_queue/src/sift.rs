//! Index-level heap maintenance shared by [`MaxHeap`](crate::MaxHeap) and the
//! in-place heapsort.
//!
//! Every routine takes an `is_greater(a, b)` predicate. With `|a, b| a > b` the
//! slice is kept as a max-heap: for each `i`, neither `2i + 1` nor `2i + 2`
//! (when inside the boundary) is greater than `i`.

/// Moves `data[index]` toward the root while it is strictly greater than its parent.
///
/// Returns the final index of the moved element.
pub fn sift_up_by<T, F>(data: &mut [T], mut index: usize, is_greater: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(index < data.len());
    while index > 0 {
        let parent = (index - 1) / 2;
        if !is_greater(&data[index], &data[parent]) {
            break;
        }
        data.swap(index, parent);
        index = parent;
    }
    index
}

/// Moves `data[root]` toward the leaves of the heap formed by `data[..end]`.
///
/// The left child is checked first, so it wins when both children are equal and
/// greater than the node. Stops as soon as no child is strictly greater.
pub fn sift_down_by<T, F>(
    data: &mut [T],
    mut root: usize,
    end: usize,
    is_greater: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(end <= data.len());
    loop {
        let left = 2 * root + 1;
        if left >= end {
            break;
        }
        let right = left + 1;

        let mut largest = root;
        if is_greater(&data[left], &data[largest]) {
            largest = left;
        }
        if right < end && is_greater(&data[right], &data[largest]) {
            largest = right;
        }

        if largest == root {
            break;
        }
        data.swap(root, largest);
        root = largest;
    }
    root
}

/// Rearranges `data` into a heap, visiting internal nodes from `n / 2 - 1` down to `0`.
pub fn build_heap_by<T, F>(data: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    for start in (0..len / 2).rev() {
        sift_down_by(data, start, len, is_greater);
    }
}

/// Returns `true` if no child in `data` is greater than its parent.
pub fn is_heap_by<T, F>(data: &[T], mut is_greater: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..data.len()).all(|child| !is_greater(&data[child], &data[(child - 1) / 2]))
}
