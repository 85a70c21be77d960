//! Statistic vocabulary and the static prerequisite table

use core::fmt;
use core::str::FromStr;

use ordered_float::OrderedFloat;

use crate::traits::StatsError;

/// Percentiles included in the default vocabulary
pub const DEFAULT_PERCENTILES: [f64; 8] = [2.0, 9.0, 25.0, 75.0, 91.0, 95.0, 98.0, 99.0];

const PERCENTILE_SUFFIX: &str = "%_ile";

/// A statistic that can be computed over a window
///
/// Names follow the vocabulary `count`, `sum`, `mean`, `median`, `minimum`,
/// `maximum`, `range`, `variance`, `standard_deviation`, `mode`, `kurtosis`,
/// `skewness`, `trimean`, `first_quartile`, `third_quartile`,
/// `quartile_range`, and `<p>%_ile` for nearest-rank percentiles.
///
/// ```
/// use windowstats::statistics::Statistic;
///
/// let p95: Statistic = "95%_ile".parse().unwrap();
/// assert_eq!(p95, Statistic::percentile(95.0));
/// assert_eq!(Statistic::StandardDeviation.to_string(), "standard_deviation");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    Count,
    Sum,
    Mean,
    Median,
    Minimum,
    Maximum,
    Range,
    Variance,
    StandardDeviation,
    Mode,
    Kurtosis,
    Skewness,
    Trimean,
    FirstQuartile,
    ThirdQuartile,
    QuartileRange,
    /// Nearest-rank percentile at the given percentage
    Percentile(OrderedFloat<f64>),
}

impl Statistic {
    /// Every non-percentile statistic, in vocabulary order
    pub const SCALARS: [Statistic; 16] = [
        Statistic::Count,
        Statistic::Sum,
        Statistic::Mean,
        Statistic::Median,
        Statistic::Minimum,
        Statistic::Maximum,
        Statistic::Range,
        Statistic::Variance,
        Statistic::StandardDeviation,
        Statistic::Mode,
        Statistic::Kurtosis,
        Statistic::Skewness,
        Statistic::Trimean,
        Statistic::FirstQuartile,
        Statistic::ThirdQuartile,
        Statistic::QuartileRange,
    ];

    /// Nearest-rank percentile at `percent`
    ///
    /// The percentage is validated when the statistic is evaluated.
    pub fn percentile(percent: f64) -> Self {
        Statistic::Percentile(OrderedFloat(percent))
    }

    /// The full default vocabulary
    pub fn vocabulary() -> Vec<Statistic> {
        Self::SCALARS
            .iter()
            .copied()
            .chain(DEFAULT_PERCENTILES.iter().map(|&p| Statistic::percentile(p)))
            .collect()
    }

    /// Statistics whose values this one is computed from
    pub fn prerequisites(&self) -> &'static [Statistic] {
        use Statistic::*;

        match self {
            Mean => &[Sum, Count],
            Variance => &[Mean],
            StandardDeviation => &[Variance],
            Skewness | Kurtosis => &[Mean, StandardDeviation],
            Range => &[Minimum, Maximum],
            QuartileRange => &[FirstQuartile, ThirdQuartile],
            Trimean => &[FirstQuartile, Median, ThirdQuartile],
            Count | Sum | Median | Minimum | Maximum | Mode | FirstQuartile | ThirdQuartile
            | Percentile(_) => &[],
        }
    }

    /// Check if the statistic may yield several values
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Statistic::Mode)
    }

    fn keyword(&self) -> Option<&'static str> {
        let name = match self {
            Statistic::Count => "count",
            Statistic::Sum => "sum",
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Minimum => "minimum",
            Statistic::Maximum => "maximum",
            Statistic::Range => "range",
            Statistic::Variance => "variance",
            Statistic::StandardDeviation => "standard_deviation",
            Statistic::Mode => "mode",
            Statistic::Kurtosis => "kurtosis",
            Statistic::Skewness => "skewness",
            Statistic::Trimean => "trimean",
            Statistic::FirstQuartile => "first_quartile",
            Statistic::ThirdQuartile => "third_quartile",
            Statistic::QuartileRange => "quartile_range",
            Statistic::Percentile(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Percentile(p) => write!(f, "{}{}", p.0, PERCENTILE_SUFFIX),
            other => f.write_str(other.keyword().unwrap_or_default()),
        }
    }
}

impl FromStr for Statistic {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if let Some(percent) = name.strip_suffix(PERCENTILE_SUFFIX) {
            return percent
                .parse::<f64>()
                .map(Statistic::percentile)
                .map_err(|_| StatsError::UnknownStatistic(s.to_string()));
        }

        Self::SCALARS
            .iter()
            .copied()
            .find(|stat| stat.keyword() == Some(name))
            .ok_or_else(|| StatsError::UnknownStatistic(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Statistic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
