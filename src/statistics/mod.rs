//! Descriptive statistics over window snapshots
//!
//! This module provides the statistic vocabulary ([`Statistic`]), requests
//! built from it ([`StatisticRequest`]), the formulas themselves
//! ([`library`]) and the dependency-aware evaluator ([`resolve`]).
//!
//! # Example
//!
//! ```
//! use std::time::UNIX_EPOCH;
//! use windowstats::statistics::{resolve, Statistic, StatisticRequest};
//! use windowstats::window::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(5);
//!
//! for value in [1.0, 5.0, 7.0, 9.0, 12.0] {
//!     window.insert(value, UNIX_EPOCH);
//! }
//!
//! let request = StatisticRequest::parse(["median", "range", "trimean"]).unwrap();
//! let eval = resolve(&window, &request).unwrap();
//!
//! println!("Median: {:?}", eval.scalar(&Statistic::Median));
//! println!("Range: {:?}", eval.scalar(&Statistic::Range));
//! ```

mod kind;
pub mod library;
mod request;
mod resolver;

pub use kind::{Statistic, DEFAULT_PERCENTILES};
pub use request::StatisticRequest;
pub use resolver::{resolve, Evaluation, StatValue};
