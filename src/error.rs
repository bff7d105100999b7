use thiserror::Error;

/// The two classes of failure a queue operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// The caller passed something the operation can't accept.
    InvalidArgument,
    /// The queue (or cursor) isn't in a state where the operation makes sense.
    InvalidState,
}

/// Errors returned by [`RingQueue`](crate::RingQueue) and [`Cursor`](crate::Cursor).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// Returned when constructing with a capacity of 0
    #[error("capacity can't be less than 1")]
    InvalidCapacity,
    /// Returned when enqueuing `None`
    #[error("value can't be absent")]
    AbsentValue,
    /// Returned when dequeuing from an empty queue
    #[error("collection is empty")]
    Empty,
    /// Cursor read before the first successful `move_next`
    #[error("cursor is not started")]
    CursorNotStarted,
    /// Cursor read after `move_next` returned false
    #[error("cursor is exhausted")]
    CursorExhausted,
    /// The queue was structurally changed since the cursor was created
    #[error("collection was modified during enumeration")]
    Modified,
}

impl QueueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueueError::InvalidCapacity | QueueError::AbsentValue => ErrorKind::InvalidArgument,
            QueueError::Empty
            | QueueError::CursorNotStarted
            | QueueError::CursorExhausted
            | QueueError::Modified => ErrorKind::InvalidState,
        }
    }
}

/// Alias for `Result<T, ringq::QueueError>`
pub type Result<T> = core::result::Result<T, QueueError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(QueueError::InvalidCapacity.kind(), ErrorKind::InvalidArgument);
        assert_eq!(QueueError::AbsentValue.kind(), ErrorKind::InvalidArgument);
        assert_eq!(QueueError::Empty.kind(), ErrorKind::InvalidState);
        assert_eq!(QueueError::CursorNotStarted.kind(), ErrorKind::InvalidState);
        assert_eq!(QueueError::CursorExhausted.kind(), ErrorKind::InvalidState);
        assert_eq!(QueueError::Modified.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn error_display() {
        assert_eq!(format!("{}", QueueError::Empty), "collection is empty");
        assert_eq!(
            format!("{}", QueueError::InvalidCapacity),
            "capacity can't be less than 1"
        );
    }
}
