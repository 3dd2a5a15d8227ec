//! Fill/drain soak scenario

use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use ringfifo::{Cursor, RingBuffer, RingConfig};

/// Offset added to the values of the second fill
const REFILL_OFFSET: u64 = 100;

/// Outcome of a completed soak run
#[derive(Debug, Clone)]
pub struct SoakReport {
    pub capacity: usize,
    pub rounds: u32,
    /// Elements enqueued (and dequeued) over all rounds
    pub transferred: u64,
    pub elapsed: Duration,
}

/// Run `rounds` fill/drain rounds on one ring of `slots` physical slots
pub fn run<I: Cursor>(slots: usize, rounds: u32) -> Result<SoakReport> {
    let mut ring: RingBuffer<u64, Vec<u64>, I> =
        RingBuffer::with_cursor_width(vec![0u64; slots], RingConfig::new())
            .with_context(|| format!("Failed to bind ring of {} slots", slots))?;

    let capacity = ring.capacity();
    let start = Instant::now();

    ring.reset();
    let mut transferred = 0;
    for round in 0..rounds {
        transferred += run_round(&mut ring).with_context(|| format!("Round {} failed", round))?;
        log::debug!("round {} done, cursors {:?}", round, ring.cursors());
    }

    Ok(SoakReport {
        capacity,
        rounds,
        transferred,
        elapsed: start.elapsed(),
    })
}

fn run_round<I: Cursor>(ring: &mut RingBuffer<u64, Vec<u64>, I>) -> Result<u64> {
    let capacity = ring.capacity() as u64;
    let half = capacity / 2;

    // Fill to capacity
    for i in 0..capacity {
        ensure!(ring.try_enqueue(i).is_ok(), "fill: enqueue {} refused", i);
        ensure!(ring.peek_back() == Some(&i), "fill: peek_back != {}", i);
        ensure!(ring.len() as u64 == i + 1, "fill: len {} after {} enqueues", ring.len(), i + 1);
        ensure!(
            ring.free_space() as u64 == capacity - (i + 1),
            "fill: free space {} after {} enqueues",
            ring.free_space(),
            i + 1
        );
    }
    ensure!(ring.free_space() == 0, "fill: ring not full");
    ensure!(ring.len() as u64 == capacity, "fill: len {} != capacity", ring.len());

    // Drain the first half
    for i in 0..half {
        let got = ring.try_dequeue_front();
        ensure!(got == Some(i), "drain: expected {}, got {:?}", i, got);
    }
    ensure!(
        ring.free_space() as u64 == half,
        "drain: free space {} != {}",
        ring.free_space(),
        half
    );

    // Refill the drained half
    for i in 0..half {
        let value = i + REFILL_OFFSET;
        ensure!(ring.try_enqueue(value).is_ok(), "refill: enqueue {} refused", value);
        ensure!(ring.peek_back() == Some(&value), "refill: peek_back != {}", value);
    }
    ensure!(ring.free_space() == 0, "refill: ring not full");
    ensure!(ring.len() as u64 == capacity, "refill: len {} != capacity", ring.len());

    // Drain everything: rest of the first fill, then the refill
    for i in half..capacity {
        let got = ring.try_dequeue_front();
        ensure!(got == Some(i), "final drain: expected {}, got {:?}", i, got);
    }
    for i in 0..half {
        let expected = i + REFILL_OFFSET;
        let got = ring.try_dequeue_front();
        ensure!(got == Some(expected), "final drain: expected {}, got {:?}", expected, got);
    }

    ensure!(ring.is_empty(), "final drain: ring not empty");
    ensure!(
        ring.free_space() as u64 == capacity,
        "final drain: free space {} != capacity",
        ring.free_space()
    );

    Ok(capacity + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soak_default_width() {
        let report = run::<usize>(1001, 3).unwrap();
        assert_eq!(report.capacity, 1000);
        assert_eq!(report.transferred, 3 * 1500);
    }

    #[test]
    fn test_soak_narrow_width_wraps() {
        // Odd capacity leaves the cursors mid-store after each round
        let report = run::<u8>(254, 5).unwrap();
        assert_eq!(report.capacity, 253);
        assert_eq!(report.transferred, 5 * (253 + 126));
    }

    #[test]
    fn test_soak_smallest_ring() {
        let report = run::<u16>(2, 4).unwrap();
        assert_eq!(report.capacity, 1);
        assert_eq!(report.transferred, 4);
    }

    #[test]
    fn test_soak_rejects_bad_sizes() {
        let err = run::<usize>(1, 1).unwrap_err();
        assert!(err.to_string().contains("Failed to bind ring of 1 slots"));

        assert!(run::<u8>(300, 1).is_err());
    }
}
