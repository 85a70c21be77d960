//! Per-stream window routing and record emission
//!
//! A [`StreamRouter`] owns one [`SlidingWindow`] per metric namespace,
//! creating it the first time the namespace is seen. Every `slidingFactor`-th
//! sample into a stream triggers an evaluation of the configured request,
//! which is flattened into [`StatRecord`]s tagged with the window's time span.
//!
//! Without `maxStreams` the router keeps every stream it has seen. With it,
//! admitting a new stream beyond the bound evicts the stream that was updated
//! least recently.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, UNIX_EPOCH};
//! use windowstats::config::StatisticsConfig;
//! use windowstats::router::{Metric, StreamRouter};
//!
//! let config = StatisticsConfig {
//!     sliding_window_length: 3,
//!     statistics: vec!["mean".into(), "maximum".into()],
//!     ..Default::default()
//! };
//! let mut router = StreamRouter::new(config).unwrap();
//!
//! let mut records = Vec::new();
//! for (i, v) in [4u32, 8, 6].into_iter().enumerate() {
//!     let ts = UNIX_EPOCH + Duration::from_secs(i as u64);
//!     records = router.process(Metric::new(["cpu", "load"], ts, v)).unwrap();
//! }
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].namespace, ["statistics", "cpu", "load", "mean"]);
//! assert_eq!(records[0].value, 6.0);
//! ```

use std::collections::HashMap;

use crate::config::{ConfigError, StatisticsConfig};
use crate::numeric::Numeric;
use crate::statistics::{resolve, Evaluation, StatValue, StatisticRequest};
use crate::traits::StatsError;
use crate::window::{SlidingWindow, Timestamp};

/// One incoming sample of a named metric
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    /// Namespace elements identifying the stream
    pub namespace: Vec<String>,
    /// Time of observation
    pub timestamp: Timestamp,
    /// Observed value
    pub data: Numeric,
}

impl Metric {
    /// Create a metric sample
    pub fn new<I, S, N>(namespace: I, timestamp: Timestamp, data: N) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        N: Into<Numeric>,
    {
        Self {
            namespace: namespace.into_iter().map(Into::into).collect(),
            timestamp,
            data: data.into(),
        }
    }
}

/// One emitted statistic value
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatRecord {
    /// Prefix, metric namespace, then statistic name; mode records end with
    /// the rank of their value among the modes
    pub namespace: Vec<String>,
    /// Statistic name
    pub statistic: String,
    /// Statistic value
    pub value: f64,
    /// Timestamp of the oldest sample in the window
    pub start_time: Timestamp,
    /// Timestamp of the newest sample in the window
    pub stop_time: Timestamp,
}

#[derive(Debug)]
struct Stream {
    window: SlidingWindow,
    /// Inserts since the last evaluation
    pending: usize,
    /// Router tick of the latest insert
    touched: u64,
}

/// Routes samples to per-namespace windows and emits statistics
#[derive(Debug)]
pub struct StreamRouter {
    config: StatisticsConfig,
    request: StatisticRequest,
    streams: HashMap<Vec<String>, Stream>,
    tick: u64,
}

impl StreamRouter {
    /// Create a router from validated configuration
    pub fn new(config: StatisticsConfig) -> Result<Self, ConfigError> {
        let request = config.validate()?;
        log::debug!(
            "stream router: window length {}, sliding factor {}, {} statistics",
            config.sliding_window_length,
            config.sliding_factor,
            request.len()
        );

        Ok(Self {
            config,
            request,
            streams: HashMap::new(),
            tick: 0,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    /// Statistics evaluated on emission
    pub fn request(&self) -> &StatisticRequest {
        &self.request
    }

    /// Insert one sample; returns records when the stream is due to emit
    pub fn process(&mut self, metric: Metric) -> Result<Vec<StatRecord>, StatsError> {
        self.tick += 1;
        let Metric {
            namespace,
            timestamp,
            data,
        } = metric;

        if !self.streams.contains_key(&namespace) {
            self.admit(&namespace);
            let window = SlidingWindow::new(self.config.sliding_window_length);
            self.streams.insert(
                namespace.clone(),
                Stream {
                    window,
                    pending: 0,
                    touched: 0,
                },
            );
        }
        let Some(stream) = self.streams.get_mut(&namespace) else {
            return Ok(Vec::new());
        };

        stream.window.insert(data.to_f64(), timestamp);
        stream.touched = self.tick;
        stream.pending += 1;

        if stream.pending < self.config.sliding_factor {
            log::trace!(
                "{}: {} of {} inserts before emission",
                namespace.join("/"),
                stream.pending,
                self.config.sliding_factor
            );
            return Ok(Vec::new());
        }
        let evaluation = resolve(&stream.window, &self.request)?;
        stream.pending = 0;
        Ok(self.records(&namespace, &evaluation))
    }

    /// Process samples in order, concatenating emitted records
    ///
    /// Stops at the first failing sample.
    pub fn process_batch<I>(&mut self, metrics: I) -> Result<Vec<StatRecord>, StatsError>
    where
        I: IntoIterator<Item = Metric>,
    {
        let mut records = Vec::new();
        for metric in metrics {
            records.extend(self.process(metric)?);
        }
        Ok(records)
    }

    /// Evaluate the configured request on a stream without inserting
    pub fn evaluate(&self, namespace: &[String]) -> Option<Result<Evaluation, StatsError>> {
        self.streams
            .get(namespace)
            .map(|stream| resolve(&stream.window, &self.request))
    }

    /// Window of a stream
    pub fn get(&self, namespace: &[String]) -> Option<&SlidingWindow> {
        self.streams.get(namespace).map(|stream| &stream.window)
    }

    /// Drop a stream, returning its window
    pub fn remove(&mut self, namespace: &[String]) -> Option<SlidingWindow> {
        self.streams.remove(namespace).map(|stream| stream.window)
    }

    /// Drop every stream
    pub fn clear(&mut self) {
        self.streams.clear();
    }

    /// Number of live streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Check if no stream is live
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Make room for a new stream under `maxStreams`
    fn admit(&mut self, namespace: &[String]) {
        log::debug!("new stream {}", namespace.join("/"));

        let Some(limit) = self.config.max_streams else {
            return;
        };
        while self.streams.len() >= limit {
            let stale = self
                .streams
                .iter()
                .min_by_key(|(_, stream)| stream.touched)
                .map(|(key, _)| key.clone());

            match stale {
                Some(key) => {
                    log::warn!(
                        "stream limit {} reached, evicting {}",
                        limit,
                        key.join("/")
                    );
                    self.streams.remove(&key);
                }
                None => break,
            }
        }
    }

    fn records(&self, namespace: &[String], evaluation: &Evaluation) -> Vec<StatRecord> {
        let Some((start_time, stop_time)) = evaluation.time_span() else {
            return Vec::new();
        };

        let mut records = Vec::new();
        for (stat, value) in evaluation.iter() {
            let name = stat.to_string();
            let ranked = matches!(value, StatValue::List(_));
            for (rank, &v) in value.as_slice().iter().enumerate() {
                if v.is_nan() {
                    continue;
                }

                let mut full = self.config.namespace_prefix.clone();
                full.extend(namespace.iter().cloned());
                full.push(name.clone());
                // List values are told apart by their 1-based rank
                if ranked {
                    full.push((rank + 1).to_string());
                }

                records.push(StatRecord {
                    namespace: full,
                    statistic: name.clone(),
                    value: v,
                    start_time,
                    stop_time,
                });
            }
        }
        records
    }
}
