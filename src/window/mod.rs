//! Bounded recent-history windows
//!
//! A [`SlidingWindow`] keeps the last `capacity` samples of one metric stream,
//! both in insertion order (for eviction and time tagging) and in ascending
//! value order (for order statistics).
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, UNIX_EPOCH};
//! use windowstats::window::SlidingWindow;
//! use windowstats::traits::OrderStatistics;
//!
//! let mut window = SlidingWindow::new(3);
//!
//! for (i, value) in [5.0, 1.0, 9.0, 4.0].into_iter().enumerate() {
//!     window.insert(value, UNIX_EPOCH + Duration::from_secs(i as u64));
//! }
//!
//! // 5.0 was evicted by 4.0
//! assert_eq!(window.sorted_values(), &[1.0, 4.0, 9.0]);
//! assert_eq!(window.min(), Some(1.0));
//! ```

mod sliding;

pub use sliding::{Sample, SlidingWindow, Timestamp};
