//! # Windowstats
//!
//! Sliding-window descriptive statistics for timestamped metric streams.
//!
//! Each metric stream keeps a bounded window of its most recent samples. On
//! demand, a requested subset of descriptive statistics is computed over that
//! window, with shared intermediate results (the mean feeding variance,
//! skewness and kurtosis, the quartiles feeding trimean and quartile range)
//! computed once per evaluation.
//!
//! ## Features
//!
//! - **Sliding windows**: fixed capacity, eviction by insertion order, an
//!   always-sorted value view and the covered time span
//! - **Statistics**: count, sum, mean, median, minimum, maximum, range,
//!   variance, standard deviation, mode, skewness, kurtosis, quartiles,
//!   quartile range, trimean and nearest-rank percentiles
//! - **Dependency-aware evaluation**: prerequisites resolved from a static
//!   table, each computed at most once per request
//! - **Stream routing**: per-namespace windows with emission throttling
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::{Duration, UNIX_EPOCH};
//! use windowstats::prelude::*;
//!
//! let mut window = SlidingWindow::new(5);
//! for (i, v) in [1.0, 5.0, 7.0, 9.0, 12.0].into_iter().enumerate() {
//!     window.insert(v, UNIX_EPOCH + Duration::from_secs(i as u64));
//! }
//!
//! let request = StatisticRequest::parse(["mean", "median", "95%_ile"]).unwrap();
//! let eval = resolve(&window, &request).unwrap();
//!
//! assert_eq!(eval.scalar(&Statistic::Median), Some(7.0));
//! assert_eq!(eval.scalar(&Statistic::percentile(95.0)), Some(12.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `router` (default): [`StreamRouter`](router::StreamRouter) and TOML
//!   configuration
//! - `serde`: serialization of samples, evaluations and records

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod numeric;
pub mod statistics;
pub mod traits;
pub mod window;

#[cfg(feature = "router")]
#[cfg_attr(docsrs, doc(cfg(feature = "router")))]
pub mod config;

#[cfg(feature = "router")]
#[cfg_attr(docsrs, doc(cfg(feature = "router")))]
pub mod router;

pub mod prelude {
    pub use crate::numeric::Numeric;
    pub use crate::statistics::{resolve, Evaluation, StatValue, Statistic, StatisticRequest};
    pub use crate::traits::*;
    pub use crate::window::{Sample, SlidingWindow, Timestamp};

    #[cfg(feature = "router")]
    pub use crate::config::StatisticsConfig;

    #[cfg(feature = "router")]
    pub use crate::router::{Metric, StatRecord, StreamRouter};
}

pub use statistics::{resolve, Statistic, StatisticRequest};
pub use traits::StatsError;
pub use window::SlidingWindow;
