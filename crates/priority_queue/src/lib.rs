//! Binary max-heap priority queue with increase-key, plus two heapsorts built on
//! the same sift routines.
//!
//! ```
//! use priority_queue::{MaxHeap, QueueError, Task};
//!
//! let mut queue = MaxHeap::new();
//! queue.insert(Task::new(1, 5, 0, 10));
//! queue.insert(Task::new(2, 3, 1, 8));
//! queue.increase_key(&2, 9)?;
//!
//! assert_eq!(queue.extract_max()?.id, 2);
//! assert_eq!(queue.extract_max()?.id, 1);
//! assert_eq!(queue.extract_max(), Err(QueueError::EmptyStructure));
//! # Ok::<(), QueueError>(())
//! ```

mod entry;
mod error;
mod heap;
mod heapsort;
pub mod sift;

pub use entry::{Prioritized, Task};
pub use error::QueueError;
pub use heap::MaxHeap;
pub use heapsort::{heapsort_array, heapsort_array_by, heapsort_entries};
