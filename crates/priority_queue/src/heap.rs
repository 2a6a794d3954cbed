//! Array-backed binary max-heap.
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_max`  | O(log n)   |
//! | `increase_key` | O(n)       |
//! | `peek`         | O(1)       |
//!
//! `increase_key` finds its target with a linear scan by identifier; there is no
//! identifier-to-index map, so duplicate identifiers resolve to the first match
//! in array order.

use std::cmp::Ordering;

use log::debug;

use crate::entry::Prioritized;
use crate::error::QueueError;
use crate::sift::{is_heap_by, sift_down_by, sift_up_by};

#[inline]
fn higher_priority<E: Prioritized>(a: &E, b: &E) -> bool {
    a.priority() > b.priority()
}

/// A priority queue that always yields the entry with the highest priority first.
///
/// The root of `data` holds the maximum; every parent's priority is greater than or
/// equal to its children's after each public call returns.
#[derive(Clone, Debug)]
pub struct MaxHeap<E> {
    data: Vec<E>,
}

impl<E> MaxHeap<E> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The entry with the highest priority, if any.
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.data.first()
    }

    /// Entries in array (heap) order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing array in heap order.
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }
}

impl<E: Prioritized> MaxHeap<E> {
    /// Appends `entry` and sifts it up to its place.
    pub fn insert(&mut self, entry: E) {
        self.data.push(entry);
        let last = self.data.len() - 1;
        sift_up_by(&mut self.data, last, &mut higher_priority::<E>);
        debug_assert!(self.is_valid_heap());
    }

    /// Removes and returns the entry with the highest priority.
    ///
    /// The last entry takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyStructure`] if the heap has no entries.
    pub fn extract_max(&mut self) -> Result<E, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::EmptyStructure);
        }
        let max = self.data.swap_remove(0);
        let len = self.data.len();
        if len > 1 {
            sift_down_by(&mut self.data, 0, len, &mut higher_priority::<E>);
        }
        debug_assert!(self.is_valid_heap());
        Ok(max)
    }

    /// Index of the first entry in array order whose identifier equals `id`.
    pub fn position(&self, id: &E::Id) -> Option<usize> {
        self.data.iter().position(|entry| entry.id() == id)
    }

    /// Raises the priority of the entry identified by `id` and sifts it up from
    /// its current index.
    ///
    /// Setting the same priority again is accepted and leaves the heap unchanged.
    ///
    /// # Errors
    /// - [`QueueError::NotFound`] if no entry has identifier `id`.
    /// - [`QueueError::InvalidPriorityChange`] if `new_priority` is lower than the
    ///   current priority or cannot be compared with it (e.g. NaN). The entry is left
    ///   untouched.
    pub fn increase_key(
        &mut self,
        id: &E::Id,
        new_priority: E::Priority,
    ) -> Result<(), QueueError> {
        let Some(index) = self.position(id) else {
            debug!(
                "increase_key: no entry with the requested id among {} entries",
                self.len()
            );
            return Err(QueueError::NotFound);
        };

        let entry = &mut self.data[index];
        match new_priority.partial_cmp(&entry.priority()) {
            Some(Ordering::Greater | Ordering::Equal) => {}
            Some(Ordering::Less) | None => {
                debug!("increase_key: rejected priority change for entry at index {index}");
                return Err(QueueError::InvalidPriorityChange);
            }
        }
        entry.set_priority(new_priority);
        sift_up_by(&mut self.data, index, &mut higher_priority::<E>);
        debug_assert!(self.is_valid_heap());
        Ok(())
    }

    /// Drains the heap, returning entries in descending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(entry) = self.extract_max() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the max-heap property over the whole array.
    pub fn is_valid_heap(&self) -> bool {
        is_heap_by(&self.data, higher_priority::<E>)
    }
}

impl<E> Default for MaxHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Prioritized> Extend<E> for MaxHeap<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<E: Prioritized> FromIterator<E> for MaxHeap<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, E> IntoIterator for &'a MaxHeap<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
