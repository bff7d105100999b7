//! Growable FIFO queue on a circular buffer.
//!
//! ```
//! use ringq::RingQueue;
//!
//! let mut q: RingQueue<i32> = RingQueue::new();
//! q.enqueue(1).unwrap();
//! q.enqueue(2).unwrap();
//! assert_eq!(q.dequeue(), Ok(1));
//! assert_eq!(q.to_vec(), vec![2]);
//! ```

// For tests we use std.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod cursor;
mod error;
mod iter;
mod ring_queue;

pub use cursor::Cursor;
pub use error::{ErrorKind, QueueError, Result};
pub use iter::{IntoIter, Iter};
pub use ring_queue::{RingQueue, DEFAULT_CAPACITY};
