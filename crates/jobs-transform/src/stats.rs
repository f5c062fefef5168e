//! Distribution summaries used by the salary charts.

/// Linear-interpolated quantile of an ascending slice.
///
/// `q` is clamped to `[0, 1]`. Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = q.clamp(0.0, 1.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Five-number summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value not below `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value not above `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
    pub count: usize,
}

impl BoxStats {
    /// Summarize `values`. Non-finite values are ignored; `None` when
    /// nothing is left.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(values);
        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;
        let reach = 1.5 * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = || {
            sorted
                .iter()
                .copied()
                .filter(move |value| *value >= low_fence && *value <= high_fence)
        };
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|value| *value < low_fence || *value > high_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
            count: sorted.len(),
        })
    }
}

/// One equal-width histogram bin covering `[start, end)`; the last bin also
/// includes its upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split `values` into `bins` equal-width bins spanning their range.
///
/// A degenerate range (all values equal) is widened by 0.5 on each side.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let sorted = sorted_finite(values);
    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    let (low, high) = if first == last {
        (first - 0.5, last + 0.5)
    } else {
        (first, last)
    };
    let width = (high - low) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|index| HistogramBin {
            start: low + width * index as f64,
            end: if index + 1 == bins {
                high
            } else {
                low + width * (index + 1) as f64
            },
            count: 0,
        })
        .collect();
    for value in sorted {
        let index = (((value - low) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }
    result
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        assert_eq!(quantile(&values, 0.25), Some(1.75));
        assert_eq!(quantile(&values, 1.0), Some(4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_box_stats_flags_outliers() {
        let values = [10.0, 12.0, 11.0, 13.0, 12.0, 100.0];
        let stats = BoxStats::from_values(&values).expect("non-empty");
        assert_eq!(stats.median, 12.0);
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.upper_whisker, 13.0);
        assert_eq!(stats.lower_whisker, 10.0);
        assert_eq!(stats.count, 6);
    }

    #[test]
    fn test_box_stats_empty() {
        assert_eq!(BoxStats::from_values(&[]), None);
        assert_eq!(BoxStats::from_values(&[f64::NAN]), None);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 10.0];
        let bins = histogram(&values, 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), 6);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[4].count, 1);
        assert_eq!(bins[4].end, 10.0);
    }

    #[test]
    fn test_histogram_single_value() {
        let bins = histogram(&[5.0, 5.0], 2);
        assert_eq!(bins[0].start, 4.5);
        assert_eq!(bins[1].end, 5.5);
        assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), 2);
    }
}
