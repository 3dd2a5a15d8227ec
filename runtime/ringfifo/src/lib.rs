//! Ring FIFO - Fixed-capacity circular buffer
//!
//! # Purpose
//! Provides a generic first-in-first-out ring buffer for producer/consumer
//! data paths (message queues between tasks, protocol framing buffers) where
//! the capacity is known when the buffer is configured.
//!
//! # Architecture
//! A caller-supplied store of `N + 1` slots and two cursors (read, write)
//! rotating through it modulo the slot count. One slot is always left empty
//! so that `read == write` means empty and `write + 1 == read` means full,
//! without a separate counter.
//!
//! # Design
//! - O(1) queries and mutators at both ends (peek/discard front and back)
//! - No allocation after construction, no blocking
//! - Empty and full are ordinary return values (`None`, `Err(value)`), never
//!   panics
//! - Element type, storage type and cursor integer width are generic
//!   parameters instead of global configuration
//!
//! # Concurrency
//! A `RingBuffer` has a single owner. Sharing it between execution contexts
//! requires external synchronization (e.g. a mutex).
//!
//! # Example
//! ```
//! use ringfifo::RingBuffer;
//!
//! let mut ring = RingBuffer::new([0u32; 5]).unwrap();
//! assert_eq!(ring.capacity(), 4);
//!
//! assert_eq!(ring.enqueue_many([1, 2, 3, 4, 5]), 4);
//! assert!(ring.is_full());
//!
//! assert_eq!(ring.try_dequeue_front(), Some(1));
//! assert_eq!(ring.peek_back(), Some(&4));
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

mod config;
mod cursor;
mod iter;
mod ring;

pub use config::RingConfig;
pub use cursor::Cursor;
pub use iter::Iter;
pub use ring::{RingBuffer, StaticRing};

use static_assertions::assert_impl_all;
use thiserror::Error;

/// Ring buffer construction errors
///
/// Full and empty conditions are not errors; they are reported through the
/// return values of the individual operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Usable capacity must be at least one slot (storage of two or more)
    #[error("Invalid ring capacity: {requested} (must be at least 1)")]
    InvalidCapacity { requested: usize },

    /// Slot count does not fit in the chosen cursor integer width
    #[error("Ring of {slots} slots exceeds cursor width (max {max} slots)")]
    CapacityOverflow { slots: usize, max: u64 },
}

pub type Result<T> = core::result::Result<T, RingError>;

assert_impl_all!(RingError: Send, Sync, Copy);
assert_impl_all!(RingBuffer<u32, [u32; 8]>: Send, Sync);
assert_impl_all!(RingBuffer<u8, [u8; 8], u8>: Send, Sync, Clone);
assert_impl_all!(RingConfig<u32>: Send, Sync, Copy);
