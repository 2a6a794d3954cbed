use std::fmt;

/// An entry that can be stored in a [`MaxHeap`](crate::MaxHeap).
///
/// - Identity is decided by `id()` alone, never by priority.
/// - `priority()` is the only ordering key; every other field is opaque to the heap.
pub trait Prioritized {
    type Id: PartialEq;
    type Priority: PartialOrd + Copy;

    fn id(&self) -> &Self::Id;

    fn priority(&self) -> Self::Priority;

    fn set_priority(&mut self, priority: Self::Priority);
}

/// A schedulable unit of work.
///
/// `arrival_time` and `deadline` are carried for the caller; the queue orders
/// tasks by `priority` only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: u64,
    pub priority: i64,
    pub arrival_time: u64,
    pub deadline: u64,
}

impl Task {
    pub fn new(id: u64, priority: i64, arrival_time: u64, deadline: u64) -> Self {
        Self {
            id,
            priority,
            arrival_time,
            deadline,
        }
    }
}

impl Prioritized for Task {
    type Id = u64;
    type Priority = i64;

    #[inline]
    fn id(&self) -> &u64 {
        &self.id
    }

    #[inline]
    fn priority(&self) -> i64 {
        self.priority
    }

    #[inline]
    fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(ID={}, Priority={}, Arrival={}, Deadline={})",
            self.id, self.priority, self.arrival_time, self.deadline
        )
    }
}
