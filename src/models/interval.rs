//! Half-open time intervals on a single day.
//!
//! # Time Model
//! All times are minutes since midnight. Blocks never span midnight.

use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end. Two intervals that
/// merely touch (`a.end == b.start`) do not overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Interval start (minutes, inclusive).
    pub start_min: u32,
    /// Interval end (minutes, exclusive).
    pub end_min: u32,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this interval (minutes). Zero for inverted input.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether an instant falls within this interval.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two intervals overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && self.end_min > other.start_min
    }

    /// Smallest interval covering both.
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start_min: self.start_min.min(other.start_min),
            end_min: self.end_min.max(other.end_min),
        }
    }

    /// Whether the interval is empty or inverted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_min <= self.start_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let w = Interval::new(100, 200);
        assert_eq!(w.duration_min(), 100);
        assert!(w.contains(100));
        assert!(w.contains(199));
        assert!(!w.contains(200)); // exclusive end
        assert!(!w.contains(50));
    }

    #[test]
    fn test_interval_overlap() {
        let a = Interval::new(10, 40);
        let b = Interval::new(30, 50);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Interval::new(40, 60); // touching but not overlapping
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_identical_intervals_overlap() {
        let a = Interval::new(480, 540);
        assert!(a.overlaps(&a.clone()));
    }

    #[test]
    fn test_hull_and_empty() {
        let h = Interval::new(10, 40).hull(&Interval::new(30, 90));
        assert_eq!(h, Interval::new(10, 90));
        assert!(Interval::new(50, 50).is_empty());
        assert!(Interval::new(60, 50).is_empty());
        assert_eq!(Interval::new(60, 50).duration_min(), 0);
    }
}
