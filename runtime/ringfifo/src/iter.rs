//! Borrowing iterator over live ring elements

use core::iter::FusedIterator;

/// Front-to-back iterator over the elements currently in a ring
///
/// Created by [`RingBuffer::iter`](crate::RingBuffer::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: &'a [T],
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [T], read: usize, len: usize) -> Self {
        Self {
            slots,
            pos: read,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.slots.get(self.pos)?;
        self.pos += 1;
        if self.pos == self.slots.len() {
            self.pos = 0;
        }
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
