//! Cursor integer widths
//!
//! Slot counts and read/write positions are stored in a caller-chosen
//! unsigned integer type. A narrow width shrinks the ring header for small
//! rings; the default is `usize`.

use core::fmt;

mod private {
    pub trait Sealed {}
}

/// Unsigned integer type used for slot count and cursor arithmetic
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. All positions passed
/// to the arithmetic helpers are below `slots`, so none of them can overflow.
pub trait Cursor: private::Sealed + Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// Position zero
    const ZERO: Self;

    /// Largest slot count representable in this width
    const MAX_SLOTS: u64;

    /// Convert a slot count, or `None` if it does not fit
    fn from_usize(n: usize) -> Option<Self>;

    /// Widen to `usize` for indexing
    fn to_usize(self) -> usize;

    /// `(self + 1) % slots`
    fn advance(self, slots: Self) -> Self;

    /// Step back one slot: `0` wraps to `slots - 1`
    fn retreat(self, slots: Self) -> Self;

    /// Number of slots from `self` (read) forward to `write`
    fn distance_to(self, write: Self, slots: Self) -> Self;

    /// `slots - 1`
    fn usable(slots: Self) -> Self;
}

macro_rules! impl_cursor {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Cursor for $ty {
                const ZERO: Self = 0;
                const MAX_SLOTS: u64 = <$ty>::MAX as u64;

                #[inline]
                fn from_usize(n: usize) -> Option<Self> {
                    <$ty>::try_from(n).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn advance(self, slots: Self) -> Self {
                    (self + 1) % slots
                }

                #[inline]
                fn retreat(self, slots: Self) -> Self {
                    if self == 0 {
                        slots - 1
                    } else {
                        self - 1
                    }
                }

                #[inline]
                fn distance_to(self, write: Self, slots: Self) -> Self {
                    if self <= write {
                        write - self
                    } else {
                        slots - self + write
                    }
                }

                #[inline]
                fn usable(slots: Self) -> Self {
                    slots - 1
                }
            }
        )*
    };
}

impl_cursor!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_at_slot_count() {
        assert_eq!(3u8.advance(5), 4);
        assert_eq!(4u8.advance(5), 0);
        assert_eq!(0usize.advance(2), 1);
        assert_eq!(1usize.advance(2), 0);
    }

    #[test]
    fn test_retreat_wraps_from_zero() {
        assert_eq!(0u16.retreat(5), 4);
        assert_eq!(3u16.retreat(5), 2);
    }

    #[test]
    fn test_distance_across_wrap() {
        // read <= write
        assert_eq!(1u32.distance_to(4, 5), 3);
        assert_eq!(2u32.distance_to(2, 5), 0);
        // write has wrapped behind read
        assert_eq!(3u32.distance_to(1, 5), 3);
        assert_eq!(4u32.distance_to(3, 5), 4);
    }

    #[test]
    fn test_narrow_width_at_limit() {
        // 255 slots is the largest u8 ring; arithmetic must not overflow
        let slots = u8::from_usize(255).unwrap();
        assert_eq!(254u8.advance(slots), 0);
        assert_eq!(200u8.distance_to(10, slots), 65);
        assert_eq!(u8::from_usize(256), None);
    }
}
