//! Requested statistic sets

use crate::statistics::Statistic;
use crate::traits::StatsError;

/// An ordered set of statistics to evaluate
///
/// Order is the order of first appearance; duplicates collapse.
///
/// ```
/// use windowstats::statistics::{Statistic, StatisticRequest};
///
/// let request = StatisticRequest::parse(["mean", "variance", "mean"]).unwrap();
/// assert_eq!(request.statistics(), &[Statistic::Mean, Statistic::Variance]);
///
/// assert!(StatisticRequest::parse(["mean", "average"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatisticRequest {
    statistics: Vec<Statistic>,
}

impl StatisticRequest {
    /// Build a request from statistics, dropping duplicates
    pub fn new<I>(statistics: I) -> Self
    where
        I: IntoIterator<Item = Statistic>,
    {
        let mut request = Self::default();
        for stat in statistics {
            request.push(stat);
        }
        request
    }

    /// The full default vocabulary
    pub fn all() -> Self {
        Self::new(Statistic::vocabulary())
    }

    /// Parse statistic names
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::UnknownStatistic`] for the first name outside the
    /// vocabulary; no request is built in that case.
    pub fn parse<I, S>(names: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let statistics = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Statistic>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(statistics))
    }

    /// Add a statistic unless already present
    pub fn push(&mut self, stat: Statistic) {
        if !self.statistics.contains(&stat) {
            self.statistics.push(stat);
        }
    }

    /// Requested statistics in order of first appearance
    pub fn statistics(&self) -> &[Statistic] {
        &self.statistics
    }

    /// Number of distinct statistics
    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    /// Check if nothing is requested
    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    /// Check if a statistic is requested
    pub fn contains(&self, stat: &Statistic) -> bool {
        self.statistics.contains(stat)
    }
}

impl FromIterator<Statistic> for StatisticRequest {
    fn from_iter<I: IntoIterator<Item = Statistic>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_order() {
        let request = StatisticRequest::parse(["skewness", "mean", "skewness", "95%_ile", "mean"])
            .unwrap();

        assert_eq!(
            request.statistics(),
            &[
                Statistic::Skewness,
                Statistic::Mean,
                Statistic::percentile(95.0)
            ]
        );
        assert_eq!(request.len(), 3);
    }

    #[test]
    fn test_unknown_rejects_whole_request() {
        let err = StatisticRequest::parse(["mean", "geometric_mean", "median"]).unwrap_err();
        assert_eq!(err, StatsError::UnknownStatistic("geometric_mean".into()));
    }

    #[test]
    fn test_all() {
        let all = StatisticRequest::all();

        assert_eq!(all.len(), 24);
        assert!(all.contains(&Statistic::QuartileRange));
        assert!(all.contains(&Statistic::percentile(2.0)));
        assert!(!all.contains(&Statistic::percentile(50.0)));
    }
}
