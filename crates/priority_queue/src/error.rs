use std::fmt;

/// Error type for priority queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `extract_max` was called on a queue with no entries.
    EmptyStructure,
    /// No entry with the requested identifier is in the queue.
    NotFound,
    /// The new priority is lower than the entry's current priority.
    InvalidPriorityChange,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyStructure => write!(f, "priority queue is empty"),
            QueueError::NotFound => write!(f, "no entry with the given identifier"),
            QueueError::InvalidPriorityChange => {
                write!(f, "new priority is lower than the current priority")
            }
        }
    }
}

impl std::error::Error for QueueError {}
