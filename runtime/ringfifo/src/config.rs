//! Ring construction options

use core::fmt;

/// Options fixed when a ring is constructed
///
/// # Example
/// ```
/// use ringfifo::{RingBuffer, RingConfig};
///
/// let mut ring = RingBuffer::with_config([7u8; 3], RingConfig::zero_fill()).unwrap();
/// let slot = ring.allocate_slot().unwrap();
/// assert_eq!(*slot, 0);
/// ```
pub struct RingConfig<T> {
    /// Blank value written into a slot by `allocate_slot` before the handle is
    /// returned. `None` leaves the stale slot contents in place.
    pub clear_on_alloc: Option<fn() -> T>,
}

impl<T> RingConfig<T> {
    /// No slot clearing
    pub const fn new() -> Self {
        Self {
            clear_on_alloc: None,
        }
    }

    /// Clear allocated slots with a custom blank value
    pub const fn clear_with(blank: fn() -> T) -> Self {
        Self {
            clear_on_alloc: Some(blank),
        }
    }
}

impl<T: Default> RingConfig<T> {
    /// Clear allocated slots to `T::default()`
    pub fn zero_fill() -> Self {
        Self::clear_with(T::default)
    }
}

impl<T> Default for RingConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RingConfig<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RingConfig<T> {}

impl<T> fmt::Debug for RingConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingConfig")
            .field("clear_on_alloc", &self.clear_on_alloc.is_some())
            .finish()
    }
}
