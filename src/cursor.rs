//! Detached enumeration over a [`RingQueue`].
//!
//! A [`Cursor`] doesn't borrow the queue between steps, it is handed the queue on
//! each call instead. That leaves the caller free to mutate the queue while a cursor
//! is alive, so every call checks the queue's version and fails with
//! [`QueueError::Modified`] once the queue has been changed.

use crate::{QueueError, Result, RingQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Before,
    At(usize),
    After,
}

/// Step-wise, fail-fast enumerator created by [`RingQueue::cursor`].
///
/// ```
/// use ringq::RingQueue;
///
/// let q: RingQueue<i32> = (1..=3).collect();
/// let mut c = q.cursor();
///
/// let mut seen = vec![];
/// while c.move_next(&q).unwrap() {
///     seen.push(*c.current(&q).unwrap());
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    version: usize,
    pos: Position,
}

impl Cursor {
    pub(crate) fn new(version: usize) -> Self {
        Cursor {
            version,
            pos: Position::Before,
        }
    }

    /// Advance to the next element. Returns `false` when there are no more, and keeps
    /// returning `false` after that.
    pub fn move_next<T>(&mut self, queue: &RingQueue<T>) -> Result<bool> {
        self.check(queue)?;

        let next = match self.pos {
            Position::Before => 0,
            Position::At(i) => i + 1,
            Position::After => return Ok(false),
        };

        if next < queue.len() {
            self.pos = Position::At(next);
            Ok(true)
        } else {
            self.pos = Position::After;
            Ok(false)
        }
    }

    /// The element the cursor is positioned on.
    pub fn current<'a, T>(&self, queue: &'a RingQueue<T>) -> Result<&'a T> {
        self.check(queue)?;

        match self.pos {
            Position::Before => Err(QueueError::CursorNotStarted),
            Position::After => Err(QueueError::CursorExhausted),
            // unchanged version means the index is still in range.
            Position::At(i) => queue.get(i).ok_or(QueueError::Modified),
        }
    }

    /// Rewind to before the first element and accept the queue as it is now.
    pub fn reset<T>(&mut self, queue: &RingQueue<T>) {
        self.version = queue.version();
        self.pos = Position::Before;
    }

    fn check<T>(&self, queue: &RingQueue<T>) -> Result<()> {
        if self.version != queue.version() {
            return Err(QueueError::Modified);
        }
        Ok(())
    }
}
