//! Dependency-aware evaluation of statistic requests
//!
//! [`resolve`] walks the static prerequisite table depth-first, so every
//! statistic is computed after the statistics it builds on, and memoizes each
//! result in a per-call scratchpad. A statistic needed by several others (the
//! mean, say, feeding variance, skewness and kurtosis) is computed once.

use std::collections::BTreeMap;

use crate::statistics::{library, Statistic, StatisticRequest};
use crate::traits::{OrderStatistics, StatsError};
use crate::window::Timestamp;

/// Value of one statistic
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StatValue {
    /// Single number
    Scalar(f64),
    /// Possibly empty list of numbers, used by the mode
    List(Vec<f64>),
}

impl StatValue {
    /// The value if it is a scalar
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StatValue::Scalar(v) => Some(*v),
            StatValue::List(_) => None,
        }
    }

    /// The values as a slice; a scalar yields one element
    pub fn as_slice(&self) -> &[f64] {
        match self {
            StatValue::Scalar(v) => core::slice::from_ref(v),
            StatValue::List(values) => values,
        }
    }
}

/// Results of one evaluation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    /// Values of the requested statistics
    values: BTreeMap<Statistic, StatValue>,
    /// Every statistic computed, in evaluation order
    computed: Vec<Statistic>,
    /// Oldest and newest timestamps of the window
    span: Option<(Timestamp, Timestamp)>,
}

impl Evaluation {
    /// Value of a requested statistic
    pub fn get(&self, stat: &Statistic) -> Option<&StatValue> {
        self.values.get(stat)
    }

    /// Scalar value of a requested statistic
    pub fn scalar(&self, stat: &Statistic) -> Option<f64> {
        self.get(stat).and_then(StatValue::as_scalar)
    }

    /// Requested statistics and their values, in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (&Statistic, &StatValue)> {
        self.values.iter()
    }

    /// Number of requested statistics
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the evaluation holds no statistics
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All statistics computed, prerequisites included, in evaluation order
    pub fn computed(&self) -> &[Statistic] {
        &self.computed
    }

    /// Oldest and newest timestamps of the evaluated window
    pub fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
        self.span
    }
}

/// Per-call memo of computed statistics
struct Scratchpad<'w, W: ?Sized> {
    window: &'w W,
    values: BTreeMap<Statistic, StatValue>,
    order: Vec<Statistic>,
}

impl<'w, W: OrderStatistics + ?Sized> Scratchpad<'w, W> {
    fn new(window: &'w W) -> Self {
        Self {
            window,
            values: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    /// Compute `stat` and its prerequisites unless already cached
    fn ensure(&mut self, stat: Statistic) -> Result<(), StatsError> {
        if self.values.contains_key(&stat) {
            return Ok(());
        }

        for &prerequisite in stat.prerequisites() {
            self.ensure(prerequisite)?;
        }

        let value = self.compute(stat)?;
        log::trace!("computed {} = {:?}", stat, value);
        self.values.insert(stat, value);
        self.order.push(stat);
        Ok(())
    }

    /// Cached scalar of a prerequisite
    fn scalar(&self, stat: Statistic) -> f64 {
        let value = self.values.get(&stat).and_then(StatValue::as_scalar);
        debug_assert!(value.is_some(), "prerequisite {} not computed", stat);
        value.unwrap_or(f64::NAN)
    }

    fn compute(&self, stat: Statistic) -> Result<StatValue, StatsError> {
        let sorted = self.window.sorted_values();

        let value = match stat {
            Statistic::Count => library::count(sorted) as f64,
            Statistic::Sum => library::sum(sorted),
            Statistic::Mean => library::mean(
                self.scalar(Statistic::Sum),
                self.scalar(Statistic::Count) as usize,
            ),
            Statistic::Median => library::median(sorted),
            Statistic::Minimum => library::minimum(sorted),
            Statistic::Maximum => library::maximum(sorted),
            Statistic::Range => library::range(
                self.scalar(Statistic::Minimum),
                self.scalar(Statistic::Maximum),
            ),
            Statistic::Variance => library::variance(sorted, self.scalar(Statistic::Mean)),
            Statistic::StandardDeviation => {
                library::standard_deviation(self.scalar(Statistic::Variance))
            }
            Statistic::Mode => return Ok(StatValue::List(library::mode(sorted))),
            Statistic::Kurtosis => library::kurtosis(
                sorted,
                self.scalar(Statistic::Mean),
                self.scalar(Statistic::StandardDeviation),
            ),
            Statistic::Skewness => library::skewness(
                sorted,
                self.scalar(Statistic::Mean),
                self.scalar(Statistic::StandardDeviation),
            ),
            Statistic::Trimean => library::trimean(
                self.scalar(Statistic::FirstQuartile),
                self.scalar(Statistic::Median),
                self.scalar(Statistic::ThirdQuartile),
            ),
            Statistic::FirstQuartile => library::first_quartile(sorted),
            Statistic::ThirdQuartile => library::third_quartile(sorted),
            Statistic::QuartileRange => library::quartile_range(
                self.scalar(Statistic::FirstQuartile),
                self.scalar(Statistic::ThirdQuartile),
            ),
            Statistic::Percentile(p) => library::percentile_nearest_rank(sorted, p.0)?,
        };

        Ok(StatValue::Scalar(value))
    }
}

/// Evaluate a request over a window
///
/// The window is only read. Each statistic, requested or needed as a
/// prerequisite, is computed at most once; the returned [`Evaluation`] holds
/// the requested statistics only.
///
/// # Errors
///
/// - [`StatsError::EmptyWindow`] if the window holds no values
/// - [`StatsError::InvalidPercentile`] if a requested percentile lies outside
///   `[0, 100]`; no partial result is returned
///
/// # Example
///
/// ```
/// use std::time::UNIX_EPOCH;
/// use windowstats::statistics::{resolve, Statistic, StatisticRequest};
/// use windowstats::window::SlidingWindow;
///
/// let mut window = SlidingWindow::new(10);
/// for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     window.insert(v, UNIX_EPOCH);
/// }
///
/// let request = StatisticRequest::parse(["standard_deviation", "mean"]).unwrap();
/// let eval = resolve(&window, &request).unwrap();
///
/// assert_eq!(eval.scalar(&Statistic::Mean), Some(5.0));
/// assert_eq!(eval.scalar(&Statistic::StandardDeviation), Some(2.0));
/// ```
pub fn resolve<W>(window: &W, request: &StatisticRequest) -> Result<Evaluation, StatsError>
where
    W: OrderStatistics + ?Sized,
{
    if window.is_empty() {
        return Err(StatsError::EmptyWindow);
    }

    let mut scratch = Scratchpad::new(window);
    for &stat in request.statistics() {
        scratch.ensure(stat)?;
    }

    let Scratchpad {
        mut values, order, ..
    } = scratch;
    values.retain(|stat, _| request.contains(stat));

    Ok(Evaluation {
        values,
        computed: order,
        span: window.time_span(),
    })
}
