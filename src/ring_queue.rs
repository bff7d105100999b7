use alloc::vec::Vec;

use crate::{Cursor, QueueError, Result};

/// Capacity used by [`RingQueue::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// FIFO queue over a circular buffer that doubles its storage when full.
///
/// Elements live in the slots `head, head + 1, ..` (modulo capacity), `len` of them.
/// Every other slot is `None`, so a dequeued value is never retained by the queue.
#[derive(Clone)]
pub struct RingQueue<T> {
    storage: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
    /// Bumped on every structural change. Compared by [`Cursor`].
    version: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        RingQueue {
            storage: empty_slots(DEFAULT_CAPACITY),
            head: 0,
            tail: 0,
            len: 0,
            version: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` elements before the first growth.
    ///
    /// Fails with [`QueueError::InvalidCapacity`] when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }

        Ok(RingQueue {
            storage: empty_slots(capacity),
            head: 0,
            tail: 0,
            len: 0,
            version: 0,
        })
    }

    /// Number of elements currently queued.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Appends a value at the tail, doubling the capacity if the queue is full.
    ///
    /// Takes anything convertible to `Option<T>` so that a plain `T` always goes in,
    /// while an absent value (`None`) is refused with [`QueueError::AbsentValue`]
    /// without touching the queue.
    pub fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let Some(value) = value.into() else {
            return Err(QueueError::AbsentValue);
        };

        self.push(value);

        Ok(())
    }

    pub(crate) fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.storage[self.tail] = Some(value);
        self.tail += 1;
        self.tail %= self.capacity();
        self.len += 1;
        self.bump();
    }

    /// Removes and returns the element at the head.
    ///
    /// Fails with [`QueueError::Empty`] if there is nothing queued.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(QueueError::Empty);
        }

        let Some(value) = self.storage[self.head].take() else {
            // head always points at a live slot when len > 0.
            return Err(QueueError::Empty);
        };

        // head wraps on capacity, never on len.
        self.head += 1;
        self.head %= self.capacity();
        self.len -= 1;
        self.bump();

        Ok(value)
    }

    /// The element that the next `dequeue` would return.
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Element at logical position `index`, where 0 is the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.storage[self.slot(index)].as_ref()
        } else {
            None
        }
    }

    /// Whether any queued element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Drops all elements. The capacity is kept.
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }

        log::trace!("clear {} elements", self.len);

        self.storage.iter_mut().for_each(|s| *s = None);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        self.bump();
    }

    /// Copies the elements into a new vec, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Starts a detached [`Cursor`] over this queue.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.version)
    }

    pub(crate) fn version(&self) -> usize {
        self.version
    }

    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.storage
    }

    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Physical slot of logical position `index`.
    #[inline(always)]
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn grow(&mut self) {
        let capacity = self.capacity() * 2;

        log::trace!("grow {} -> {}", self.capacity(), capacity);

        // Walk the ring so a wrapped queue comes out linear from slot 0.
        let mut storage = Vec::with_capacity(capacity);
        for i in 0..self.len {
            let slot = self.slot(i);
            storage.push(self.storage[slot].take());
        }
        storage.resize_with(capacity, || None);

        self.storage = storage;
        self.head = 0;
        self.tail = self.len % capacity;
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Queues are equal when they hold equal elements in the same order,
/// regardless of capacity or where the ring currently starts.
impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}
