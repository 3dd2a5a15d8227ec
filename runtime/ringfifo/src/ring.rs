//! Fixed-capacity ring buffer
//!
//! The ring binds a store of `N + 1` slots and exposes a usable capacity of
//! `N`. The spare slot keeps "empty" (`read == write`) and "full"
//! (`write + 1 == read`, modulo the slot count) distinct, so occupancy is
//! always derived from the two cursors.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

use crate::config::RingConfig;
use crate::cursor::Cursor;
use crate::iter::Iter;
use crate::{Result, RingError};

/// FIFO ring buffer over caller-provided storage
///
/// # Type Parameters
/// * `T` - Element type
/// * `S` - Backing store (`[T; M]`, `&mut [T]`, `Vec<T>`, `Box<[T]>`, ...)
/// * `I` - Cursor integer width (see [`Cursor`]), `usize` by default
///
/// # Invariants
/// - `0 <= read, write < slots`
/// - empty iff `read == write`
/// - full iff `(write + 1) % slots == read`
/// - `capacity() == slots - 1`
///
/// # Memory Layout
/// Slots outside the live range keep whatever they last held. `reset` and the
/// discard operations move cursors only; stored data is never erased.
pub struct RingBuffer<T, S, I = usize> {
    /// Backing store, `slots` elements long
    storage: S,
    /// Physical slot count (usable capacity + 1)
    slots: I,
    /// Next slot to read (oldest element)
    read: I,
    /// Next slot to write
    write: I,
    config: RingConfig<T>,
}

/// Ring stored inline in a fixed array of `SLOTS` slots (capacity `SLOTS - 1`)
pub type StaticRing<T, const SLOTS: usize> = RingBuffer<T, [T; SLOTS]>;

impl<T, S> RingBuffer<T, S>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    /// Bind a store of `N + 1` slots as a ring of capacity `N`
    ///
    /// # Errors
    /// Returns `RingError::InvalidCapacity` if the store has fewer than two
    /// slots.
    pub fn new(storage: S) -> Result<Self> {
        Self::with_cursor_width(storage, RingConfig::new())
    }

    /// Bind a store with explicit construction options
    pub fn with_config(storage: S, config: RingConfig<T>) -> Result<Self> {
        Self::with_cursor_width(storage, config)
    }
}

impl<T, S, I> RingBuffer<T, S, I>
where
    S: AsRef<[T]> + AsMut<[T]>,
    I: Cursor,
{
    /// Bind a store using cursor width `I`
    ///
    /// # Errors
    /// - `RingError::InvalidCapacity` if the store has fewer than two slots
    /// - `RingError::CapacityOverflow` if the slot count does not fit in `I`
    pub fn with_cursor_width(storage: S, config: RingConfig<T>) -> Result<Self> {
        let len = storage.as_ref().len();

        if len < 2 {
            log::warn!("ring rejected: {} slot(s) leaves no usable capacity", len);
            return Err(RingError::InvalidCapacity {
                requested: len.saturating_sub(1),
            });
        }

        let slots = I::from_usize(len).ok_or_else(|| {
            log::warn!("ring rejected: {} slots exceeds cursor width", len);
            RingError::CapacityOverflow {
                slots: len,
                max: I::MAX_SLOTS,
            }
        })?;

        log::debug!(
            "ring bound: {} slots, capacity {}, clear_on_alloc={}",
            len,
            len - 1,
            config.clear_on_alloc.is_some()
        );

        Ok(Self {
            storage,
            slots,
            read: I::ZERO,
            write: I::ZERO,
            config,
        })
    }

    /// Current number of elements
    pub fn len(&self) -> usize {
        self.read.distance_to(self.write, self.slots).to_usize()
    }

    /// Number of elements that can still be enqueued
    pub fn free_space(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Usable capacity (one less than the slot count)
    pub fn capacity(&self) -> usize {
        I::usable(self.slots).to_usize()
    }

    /// Check if the ring is empty
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Check if the ring is full
    pub fn is_full(&self) -> bool {
        self.write.advance(self.slots) == self.read
    }

    /// Logically drop all elements
    ///
    /// Both cursors return to slot 0. Slot contents are left as they are and
    /// become unreachable.
    pub fn reset(&mut self) {
        log::trace!("ring reset: dropping {} element(s)", self.len());
        self.read = I::ZERO;
        self.write = I::ZERO;
    }

    /// Append an element at the back
    ///
    /// # Errors
    /// Hands `value` back if the ring is full. Storage and cursors are left
    /// unchanged.
    pub fn try_enqueue(&mut self, value: T) -> core::result::Result<(), T> {
        let next = self.write.advance(self.slots);
        if next == self.read {
            return Err(value);
        }

        self.storage.as_mut()[self.write.to_usize()] = value;
        self.write = next;
        Ok(())
    }

    /// Reserve the next write slot for in-place construction
    ///
    /// The slot counts as enqueued as soon as this returns. With
    /// `RingConfig::clear_on_alloc` set the slot holds the blank value,
    /// otherwise it holds whatever was last stored there.
    ///
    /// Returns `None` if the ring is full.
    pub fn allocate_slot(&mut self) -> Option<&mut T> {
        let next = self.write.advance(self.slots);
        if next == self.read {
            return None;
        }

        let index = self.write.to_usize();
        self.write = next;

        let blank = self.config.clear_on_alloc;
        let slot = &mut self.storage.as_mut()[index];
        if let Some(blank) = blank {
            *slot = blank();
        }
        Some(slot)
    }

    /// Enqueue elements until the ring fills or `values` runs out
    ///
    /// Returns how many were accepted. `values` is never advanced past the
    /// last accepted element, so nothing is lost when the ring fills up.
    pub fn enqueue_many<V>(&mut self, values: V) -> usize
    where
        V: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let mut accepted = 0;

        while !self.is_full() {
            let Some(value) = values.next() else {
                break;
            };
            if self.try_enqueue(value).is_err() {
                break;
            }
            accepted += 1;
        }

        accepted
    }

    /// Oldest element, without removing it
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage.as_ref().get(self.read.to_usize())
    }

    /// Most recently enqueued element, without removing it
    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // write == 0 means the newest element sits in the last slot
        let last = self.write.retreat(self.slots);
        self.storage.as_ref().get(last.to_usize())
    }

    /// Drop the oldest element; no-op when empty
    pub fn discard_front(&mut self) {
        if !self.is_empty() {
            self.read = self.read.advance(self.slots);
        }
    }

    /// Drop the newest element; no-op when empty
    pub fn discard_back(&mut self) {
        if !self.is_empty() {
            self.write = self.write.retreat(self.slots);
        }
    }

    /// Iterate over live elements from oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.storage.as_ref(), self.read.to_usize(), self.len())
    }

    /// Read-only view of every physical slot, live or not
    pub fn storage(&self) -> &[T] {
        self.storage.as_ref()
    }

    /// Current `(read, write)` slot positions
    pub fn cursors(&self) -> (usize, usize) {
        (self.read.to_usize(), self.write.to_usize())
    }

    /// Give the backing store back to its owner
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<T, S, I> RingBuffer<T, S, I>
where
    T: Clone,
    S: AsRef<[T]> + AsMut<[T]>,
    I: Cursor,
{
    /// Remove and return the oldest element
    pub fn try_dequeue_front(&mut self) -> Option<T> {
        let value = self.peek_front()?.clone();
        self.discard_front();
        Some(value)
    }

    /// Remove and return the newest element
    pub fn try_dequeue_back(&mut self) -> Option<T> {
        let value = self.peek_back()?.clone();
        self.discard_back();
        Some(value)
    }

    /// Move the oldest element into `out`
    ///
    /// Returns `false` and leaves `out` untouched if the ring is empty.
    pub fn try_dequeue_front_into(&mut self, out: &mut T) -> bool {
        match self.peek_front() {
            Some(front) => out.clone_from(front),
            None => return false,
        }
        self.discard_front();
        true
    }

    /// Dequeue from the front into `out` until it is full or the ring is empty
    ///
    /// Returns how many elements were written to the start of `out`.
    pub fn dequeue_many(&mut self, out: &mut [T]) -> usize {
        let mut produced = 0;
        for slot in out.iter_mut() {
            if !self.try_dequeue_front_into(slot) {
                break;
            }
            produced += 1;
        }
        produced
    }
}

#[cfg(feature = "alloc")]
impl<T: Default> RingBuffer<T, Vec<T>> {
    /// Allocate a heap store for `capacity` elements
    ///
    /// This is the only allocation the ring ever performs.
    ///
    /// # Errors
    /// Returns `RingError::InvalidCapacity` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::allocate(capacity, RingConfig::new())
    }
}

#[cfg(feature = "alloc")]
impl<T: Default, I: Cursor> RingBuffer<T, Vec<T>, I> {
    /// Allocate a heap store for `capacity` elements with cursor width `I`
    pub fn allocate(capacity: usize, config: RingConfig<T>) -> Result<Self> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity { requested: 0 });
        }

        let slots = capacity.checked_add(1).ok_or(RingError::CapacityOverflow {
            slots: usize::MAX,
            max: I::MAX_SLOTS,
        })?;
        // Check the width before allocating a store that would be rejected
        if I::from_usize(slots).is_none() {
            return Err(RingError::CapacityOverflow {
                slots,
                max: I::MAX_SLOTS,
            });
        }

        let mut storage = Vec::with_capacity(slots);
        storage.resize_with(slots, T::default);
        Self::with_cursor_width(storage, config)
    }
}

impl<T, S, I> Clone for RingBuffer<T, S, I>
where
    S: Clone,
    I: Copy,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            slots: self.slots,
            read: self.read,
            write: self.write,
            config: self.config,
        }
    }
}

impl<T, S, I> fmt::Debug for RingBuffer<T, S, I>
where
    T: fmt::Debug,
    S: AsRef<[T]> + AsMut<[T]>,
    I: Cursor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, S, I> IntoIterator for &'a RingBuffer<T, S, I>
where
    S: AsRef<[T]> + AsMut<[T]>,
    I: Cursor,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
