//! Descriptive statistic formulas
//!
//! Every function takes the window's values in ascending order and, where a
//! statistic builds on others, the already-computed prerequisite values.
//! Nothing here derives its own prerequisites.
//!
//! Degenerate inputs produce NaN rather than panicking: an empty slice has no
//! mean, median or quartiles, and a window without spread has no skewness or
//! kurtosis.

use crate::traits::StatsError;

/// Number of values
pub fn count(sorted: &[f64]) -> usize {
    sorted.len()
}

/// Sum of all values
pub fn sum(sorted: &[f64]) -> f64 {
    sorted.iter().sum()
}

/// Arithmetic mean from a precomputed sum and count
pub fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Smallest value
pub fn minimum(sorted: &[f64]) -> f64 {
    sorted.first().copied().unwrap_or(f64::NAN)
}

/// Largest value
pub fn maximum(sorted: &[f64]) -> f64 {
    sorted.last().copied().unwrap_or(f64::NAN)
}

/// Difference between two bounds, `max - min`
pub fn range(min: f64, max: f64) -> f64 {
    max - min
}

/// Population variance around `mean`
///
/// The window is treated as the whole population, so the divisor is `n`.
/// A window of zero or one value has variance 0.
pub fn variance(sorted: &[f64], mean: f64) -> f64 {
    let n = sorted.len();
    if n <= 1 {
        return 0.0;
    }

    let total: f64 = sorted.iter().map(|&x| (x - mean).powi(2)).sum();
    total / n as f64
}

/// Square root of the variance
pub fn standard_deviation(variance: f64) -> f64 {
    variance.sqrt()
}

/// Middle value, averaging the two central values for even lengths
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        f64::NAN
    } else if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Nearest-rank percentile
///
/// Selects the value at ordinal rank `ceil(n * percent / 100)`; rank 0
/// (only reachable with `percent == 0`) selects the minimum.
///
/// # Errors
///
/// Returns [`StatsError::InvalidPercentile`] unless `0 <= percent <= 100`.
pub fn percentile_nearest_rank(sorted: &[f64], percent: f64) -> Result<f64, StatsError> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(StatsError::InvalidPercentile(percent));
    }

    let n = sorted.len();
    if n == 0 {
        return Ok(f64::NAN);
    }

    let rank = (n as f64 * percent / 100.0).ceil() as usize;
    Ok(sorted[rank.clamp(1, n) - 1])
}

/// Most frequent values, ascending
///
/// Empty when no value repeats, or when two or more distinct values share
/// the highest frequency and together make up the whole window. Values are
/// counted by numeric equality, so `-0.0` and `0.0` are one value.
pub fn mode(sorted: &[f64]) -> Vec<f64> {
    let mut modes = Vec::new();
    let mut highest = 0usize;

    // Equal values are adjacent in sorted order; NaN only matches itself
    let mut start = 0;
    while start < sorted.len() {
        let value = sorted[start];
        let run = sorted[start..]
            .iter()
            .take_while(|v| **v == value || v.total_cmp(&value).is_eq())
            .count();

        if run > highest {
            highest = run;
            modes.clear();
        }
        if run == highest {
            modes.push(value);
        }
        start += run;
    }

    let uniform = modes.len() > 1 && modes.len() * highest == sorted.len();
    if highest <= 1 || uniform {
        modes.clear();
    }
    modes
}

/// Split into lower and upper halves, leaving out the median for odd lengths
fn halves(sorted: &[f64]) -> (&[f64], &[f64]) {
    let half = sorted.len() / 2;
    (&sorted[..half], &sorted[sorted.len() - half..])
}

/// Median of the lower half
pub fn first_quartile(sorted: &[f64]) -> f64 {
    median(halves(sorted).0)
}

/// Median of the upper half
pub fn third_quartile(sorted: &[f64]) -> f64 {
    median(halves(sorted).1)
}

/// Spread between the quartiles, `q3 - q1`
pub fn quartile_range(first_quartile: f64, third_quartile: f64) -> f64 {
    third_quartile - first_quartile
}

/// Tukey's trimean, `(q1 + 2 * median + q3) / 4`
pub fn trimean(first_quartile: f64, median: f64, third_quartile: f64) -> f64 {
    (first_quartile + 2.0 * median + third_quartile) / 4.0
}

fn standardized_moment(sorted: &[f64], mean: f64, stdev: f64, power: i32) -> f64 {
    let n = sorted.len();
    if n <= 2 || !stdev.is_finite() || stdev <= 0.0 {
        return f64::NAN;
    }

    let total: f64 = sorted.iter().map(|&x| ((x - mean) / stdev).powi(power)).sum();
    total / n as f64
}

/// Population skewness, the mean cubed z-score
///
/// NaN for windows of two values or fewer, or without spread.
pub fn skewness(sorted: &[f64], mean: f64, stdev: f64) -> f64 {
    standardized_moment(sorted, mean, stdev, 3)
}

/// Population kurtosis (not excess), the mean fourth-power z-score
///
/// NaN for windows of two values or fewer, or without spread.
pub fn kurtosis(sorted: &[f64], mean: f64, stdev: f64) -> f64 {
    standardized_moment(sorted, mean, stdev, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 0.01
    }

    #[test]
    fn test_central_tendency() {
        let data = [1.0, 5.0, 7.0, 9.0, 12.0];

        assert_eq!(count(&data), 5);
        assert_eq!(sum(&data), 34.0);
        assert!(close(mean(34.0, 5), 6.8));
        assert_eq!(median(&data), 7.0);
        assert_eq!(median(&[16.0, 24.0, 33.0, 53.0]), 28.5);
        assert_eq!(minimum(&data), 1.0);
        assert_eq!(maximum(&data), 12.0);
        assert_eq!(range(1.0, 12.0), 11.0);
    }

    #[test]
    fn test_empty() {
        assert!(mean(0.0, 0).is_nan());
        assert!(minimum(&[]).is_nan());
        assert!(maximum(&[]).is_nan());
        assert!(median(&[]).is_nan());
        assert!(first_quartile(&[]).is_nan());
        assert!(mode(&[]).is_empty());
        assert!(percentile_nearest_rank(&[], 50.0).unwrap().is_nan());
    }

    #[test]
    fn test_population_variance() {
        let data = [1.0, 5.0, 7.0, 9.0, 12.0];
        let v = variance(&data, 6.8);

        assert!(close(v, 13.76));
        assert!(close(standard_deviation(v), 3.709));
        assert_eq!(variance(&[42.0], 42.0), 0.0);
        assert_eq!(variance(&[], f64::NAN), 0.0);
    }

    #[test]
    fn test_percentile_nearest_rank() {
        let data = [15.0, 20.0, 35.0, 40.0, 50.0];

        assert_eq!(percentile_nearest_rank(&data, 0.0), Ok(15.0));
        assert_eq!(percentile_nearest_rank(&data, 5.0), Ok(15.0));
        assert_eq!(percentile_nearest_rank(&data, 30.0), Ok(20.0));
        assert_eq!(percentile_nearest_rank(&data, 40.0), Ok(20.0));
        assert_eq!(percentile_nearest_rank(&data, 50.0), Ok(35.0));
        assert_eq!(percentile_nearest_rank(&data, 99.0), Ok(50.0));
        assert_eq!(percentile_nearest_rank(&data, 100.0), Ok(50.0));
    }

    #[test]
    fn test_percentile_out_of_range() {
        let data = [1.0, 2.0];

        assert_eq!(
            percentile_nearest_rank(&data, -0.5),
            Err(StatsError::InvalidPercentile(-0.5))
        );
        assert_eq!(
            percentile_nearest_rank(&data, 100.5),
            Err(StatsError::InvalidPercentile(100.5))
        );
        assert!(percentile_nearest_rank(&data, f64::NAN).is_err());
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), vec![2.0]);
        assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0, 3.0, 4.0]), vec![1.0, 3.0]);
        assert_eq!(mode(&[7.0, 7.0, 7.0]), vec![7.0]);

        // All distinct
        assert!(mode(&[1.0, 2.0, 3.0]).is_empty());
        assert!(mode(&[33.0]).is_empty());
        // Every value equally frequent
        assert!(mode(&[1.0, 1.0, 2.0, 2.0]).is_empty());
    }

    #[test]
    fn test_mode_signed_zero() {
        assert_eq!(mode(&[-0.0, 0.0]), vec![0.0]);
        assert_eq!(mode(&[-1.0, -0.0, 0.0, 0.0, 5.0]), vec![0.0]);
        let nan = mode(&[3.0, f64::NAN, f64::NAN]);
        assert_eq!(nan.len(), 1);
        assert!(nan[0].is_nan());
    }

    #[test]
    fn test_quartiles_exclude_median() {
        let odd = [16.0, 18.0, 24.0, 33.0, 53.0];
        assert_eq!(first_quartile(&odd), 17.0);
        assert_eq!(third_quartile(&odd), 43.0);

        let even = [16.0, 24.0, 33.0, 53.0];
        assert_eq!(first_quartile(&even), 20.0);
        assert_eq!(third_quartile(&even), 43.0);

        let three = [24.0, 33.0, 53.0];
        assert_eq!(first_quartile(&three), 24.0);
        assert_eq!(third_quartile(&three), 53.0);

        assert!(first_quartile(&[5.0]).is_nan());
        assert!(third_quartile(&[5.0]).is_nan());
    }

    #[test]
    fn test_trimean_and_quartile_range() {
        assert_eq!(trimean(17.0, 24.0, 43.0), 27.0);
        assert_eq!(trimean(24.0, 33.0, 53.0), 35.75);
        assert_eq!(quartile_range(17.0, 43.0), 26.0);
    }

    #[test]
    fn test_shape() {
        let data = [24.0, 33.0, 53.0];
        let m = mean(sum(&data), 3);
        let sd = standard_deviation(variance(&data, m));

        assert!(close(skewness(&data, m, sd), 0.426));

        let data = [16.0, 24.0, 33.0, 53.0];
        let m = mean(sum(&data), 4);
        let sd = standard_deviation(variance(&data, m));

        assert!(close(skewness(&data, m, sd), 0.552));
        assert!(close(kurtosis(&data, m, sd), 1.8964));
    }

    #[test]
    fn test_shape_degenerate() {
        // Two values have spread but too little to describe shape
        assert!(skewness(&[33.0, 53.0], 43.0, 10.0).is_nan());
        assert!(kurtosis(&[33.0, 53.0], 43.0, 10.0).is_nan());

        // No spread
        assert!(skewness(&[4.0, 4.0, 4.0], 4.0, 0.0).is_nan());
        assert!(kurtosis(&[4.0, 4.0, 4.0], 4.0, 0.0).is_nan());
        assert!(kurtosis(&[1.0, 2.0, 3.0], 2.0, f64::NAN).is_nan());
    }
}
