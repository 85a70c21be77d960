//! Fixed-capacity sliding window with a value-ordered view
//!
//! Samples live in a ring of `capacity` slots. While the ring is filling, new
//! samples are appended; once full, each insert overwrites the slot at the
//! write cursor, which always holds the least-recently-inserted sample.
//!
//! The ascending view is maintained incrementally: the evicted value is
//! located by binary search and removed, and the new value is inserted after
//! any equal values already present. Ordering uses IEEE-754 total ordering,
//! so NaN inputs sort last instead of corrupting the view.

use core::cmp::Ordering;
use std::time::SystemTime;

use crate::traits::OrderStatistics;

/// Point in time attached to a sample
pub type Timestamp = SystemTime;

/// A value/timestamp pair
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// Observed value
    pub value: f64,
    /// Time of observation
    pub timestamp: Timestamp,
}

impl Sample {
    /// Create a new sample
    pub fn new(value: f64, timestamp: Timestamp) -> Self {
        Self { value, timestamp }
    }
}

/// Sliding window over the most recent `capacity` samples of a stream
///
/// Callers must insert in non-decreasing timestamp order for
/// [`time_span`](OrderStatistics::time_span) to describe the covered
/// interval; the window itself evicts by insertion order.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use windowstats::window::SlidingWindow;
/// use windowstats::traits::OrderStatistics;
///
/// let mut window = SlidingWindow::new(2);
/// let t = |s| UNIX_EPOCH + Duration::from_secs(s);
///
/// window.insert(3.0, t(1));
/// window.insert(7.0, t(2));
/// window.insert(5.0, t(3));
///
/// assert_eq!(window.len(), 2);
/// assert_eq!(window.sorted_values(), &[5.0, 7.0]);
/// assert_eq!(window.time_span(), Some((t(2), t(3))));
/// ```
#[derive(Clone, Debug)]
pub struct SlidingWindow {
    /// Maximum number of samples
    capacity: usize,
    /// Samples in slot order
    slots: Vec<Sample>,
    /// Current values, ascending
    sorted: Vec<f64>,
    /// Next slot to overwrite once full
    cursor: usize,
    /// Total inserts over the window's lifetime
    inserts: u64,
}

impl SlidingWindow {
    /// Create an empty window holding at most `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            sorted: Vec::with_capacity(capacity),
            cursor: 0,
            inserts: 0,
        }
    }

    /// Insert a sample, evicting the least-recently-inserted one when full
    pub fn insert(&mut self, value: f64, timestamp: Timestamp) {
        self.inserts += 1;
        let sample = Sample::new(value, timestamp);

        if self.slots.len() < self.capacity {
            self.slots.push(sample);
        } else {
            let evicted = core::mem::replace(&mut self.slots[self.cursor], sample);
            self.cursor = (self.cursor + 1) % self.capacity;

            let idx = self
                .sorted
                .partition_point(|v| v.total_cmp(&evicted.value) == Ordering::Less);
            self.sorted.remove(idx);
        }

        let idx = self
            .sorted
            .partition_point(|v| v.total_cmp(&value) != Ordering::Greater);
        self.sorted.insert(idx, value);
    }

    /// Maximum number of samples
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the window holds `capacity` samples
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Total number of inserts since creation
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Index of the next slot to be overwritten
    pub fn write_cursor(&self) -> usize {
        self.cursor
    }

    /// Samples from oldest to newest by insertion order
    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer.iter())
    }

    /// Least-recently-inserted sample
    pub fn oldest(&self) -> Option<&Sample> {
        self.slots.get(self.cursor)
    }

    /// Most-recently-inserted sample
    pub fn newest(&self) -> Option<&Sample> {
        let len = self.slots.len();
        if len == 0 {
            None
        } else {
            self.slots.get((self.cursor + len - 1) % len)
        }
    }
}

impl OrderStatistics for SlidingWindow {
    fn sorted_values(&self) -> &[f64] {
        &self.sorted
    }

    fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.oldest()?.timestamp, self.newest()?.timestamp))
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn ts(secs: u64) -> Timestamp {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn filled(capacity: usize, values: &[f64]) -> SlidingWindow {
        let mut window = SlidingWindow::new(capacity);
        for (i, &v) in values.iter().enumerate() {
            window.insert(v, ts(i as u64));
        }
        window
    }

    #[test]
    fn test_basic() {
        let window = filled(5, &[9.0, 2.0, 7.0]);

        assert_eq!(window.len(), 3);
        assert!(!window.is_full());
        assert_eq!(window.sorted_values(), &[2.0, 7.0, 9.0]);
        assert_eq!(window.min(), Some(2.0));
        assert_eq!(window.max(), Some(9.0));
        assert_eq!(window.nth_by_value(1), Some(7.0));
        assert_eq!(window.write_cursor(), 0);
    }

    #[test]
    fn test_eviction_by_insertion_order() {
        let window = filled(3, &[1.0, 2.0, 3.0, 10.0, 20.0]);

        assert_eq!(window.len(), 3);
        assert!(window.is_full());
        assert_eq!(window.inserts(), 5);
        assert_eq!(window.sorted_values(), &[3.0, 10.0, 20.0]);
        assert_eq!(window.write_cursor(), 2);

        let order: Vec<f64> = window.samples().map(|s| s.value).collect();
        assert_eq!(order, vec![3.0, 10.0, 20.0]);
    }

    #[test]
    fn test_time_span() {
        let empty = SlidingWindow::new(3);
        assert_eq!(empty.time_span(), None);

        let window = filled(3, &[1.0, 2.0]);
        assert_eq!(window.time_span(), Some((ts(0), ts(1))));

        let window = filled(3, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(window.time_span(), Some((ts(1), ts(3))));
        assert_eq!(window.oldest().map(|s| s.value), Some(2.0));
        assert_eq!(window.newest().map(|s| s.value), Some(4.0));
    }

    #[test]
    fn test_duplicates() {
        let window = filled(4, &[5.0, 5.0, 1.0, 5.0, 1.0, 1.0]);

        // Remaining: [1.0, 5.0, 1.0, 1.0]
        assert_eq!(window.sorted_values(), &[1.0, 1.0, 1.0, 5.0]);
    }

    #[test]
    fn test_capacity_one() {
        let window = filled(1, &[4.0, 8.0, 2.0]);

        assert_eq!(window.len(), 1);
        assert_eq!(window.sorted_values(), &[2.0]);
        assert_eq!(window.time_span(), Some((ts(2), ts(2))));
    }

    #[test]
    fn test_nan_does_not_panic() {
        let window = filled(3, &[1.0, f64::NAN, -1.0, 2.0]);

        assert_eq!(window.len(), 3);
        assert_eq!(window.min(), Some(-1.0));
        assert!(window.max().map_or(false, f64::is_nan));
    }

    #[test]
    fn test_infinity() {
        let window = filled(3, &[1.0, f64::INFINITY, f64::NEG_INFINITY]);

        assert_eq!(window.min(), Some(f64::NEG_INFINITY));
        assert_eq!(window.max(), Some(f64::INFINITY));
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity() {
        let _ = SlidingWindow::new(0);
    }
}
