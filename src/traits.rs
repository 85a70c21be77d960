//! Core traits and error types
//!
//! The [`OrderStatistics`] trait is the read-only view a statistic evaluation
//! needs from a window: its size and its values in ascending order. The
//! [`SlidingWindow`](crate::window::SlidingWindow) implements it, and so can any
//! other container that keeps its values sorted.

use core::fmt::Debug;

use thiserror::Error;

use crate::window::Timestamp;

/// Error raised while building a request or evaluating statistics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Name outside the statistic vocabulary
    #[error("unknown statistic: {0:?}")]
    UnknownStatistic(String),
    /// Percentile outside `[0, 100]`
    #[error("percentile must be within [0, 100], got {0}")]
    InvalidPercentile(f64),
    /// Evaluation requested on a window holding no samples
    #[error("window is empty")]
    EmptyWindow,
    /// Raw value that does not denote a number
    #[error("non-numeric sample value: {0:?}")]
    NonNumeric(String),
}

/// Read-only order-statistics view over a bounded set of values
pub trait OrderStatistics: Debug {
    /// All current values in ascending order
    fn sorted_values(&self) -> &[f64];

    /// Oldest and newest timestamps, by insertion order
    fn time_span(&self) -> Option<(Timestamp, Timestamp)>;

    /// Number of values held
    fn len(&self) -> usize {
        self.sorted_values().len()
    }

    /// Check if no values are held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest value
    fn min(&self) -> Option<f64> {
        self.sorted_values().first().copied()
    }

    /// Largest value
    fn max(&self) -> Option<f64> {
        self.sorted_values().last().copied()
    }

    /// The `n`-th smallest value (0-indexed)
    fn nth_by_value(&self, n: usize) -> Option<f64> {
        self.sorted_values().get(n).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(Vec<f64>);

    impl OrderStatistics for Fixed {
        fn sorted_values(&self) -> &[f64] {
            &self.0
        }

        fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
            None
        }
    }

    #[test]
    fn test_default_accessors() {
        let view = Fixed(vec![1.0, 4.0, 9.0]);

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.min(), Some(1.0));
        assert_eq!(view.max(), Some(9.0));
        assert_eq!(view.nth_by_value(1), Some(4.0));
        assert_eq!(view.nth_by_value(3), None);

        let empty = Fixed(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StatsError::UnknownStatistic("average".into()).to_string(),
            "unknown statistic: \"average\""
        );
        assert_eq!(
            StatsError::InvalidPercentile(101.0).to_string(),
            "percentile must be within [0, 100], got 101"
        );
        assert_eq!(StatsError::EmptyWindow.to_string(), "window is empty");
    }
}
