use crate::quantile::compute_quantile;

/// Five-number summary of a numeric dataset.
///
/// The five numbers are the minimum, first quartile, median, third quartile,
/// and maximum. Together they describe the spread of a dataset the way a
/// box-and-whisker plot draws it: whiskers at `min` and `max`, the box from
/// `q1` to `q3`, and a line at the `median`.
///
/// Quartiles interpolate linearly between adjacent entries; see
/// [`compute_quantile`](crate::quantile::compute_quantile).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    /// The minimum value in the dataset.
    pub min: f64,
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The median (50th percentile).
    pub median: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
    /// The maximum value in the dataset.
    pub max: f64,
}

impl FiveNumberSummary {
    /// Computes a five-number summary from unsorted values.
    ///
    /// This method will sort the values internally before computing the
    /// summary.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(FiveNumberSummary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use vizprep_stats::summary::FiveNumberSummary;
    /// let summary = FiveNumberSummary::new([3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.median, 2.0);
    /// assert_eq!(summary.max, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes a five-number summary from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(FiveNumberSummary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vizprep_stats::summary::FiveNumberSummary;
    /// let mut values = [5.0, 2.0, 8.0, 1.0, 9.0];
    /// values.sort_by(f64::total_cmp);
    /// let summary = FiveNumberSummary::from_sorted(&values).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 9.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        Some(Self {
            min,
            q1: compute_quantile(sorted_values, 0.25),
            median: compute_quantile(sorted_values, 0.5),
            q3: compute_quantile(sorted_values, 0.75),
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_empty_input() {
        let values: [f64; 0] = [];
        assert!(FiveNumberSummary::new(values).is_none());
    }

    #[test]
    fn test_single_value_collapses_all_five() {
        let summary = FiveNumberSummary::new([42.0]).unwrap();
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.q1, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.q3, 42.0);
        assert_eq!(summary.max, 42.0);
    }

    #[test]
    fn test_known_quartiles() {
        let summary = FiveNumberSummary::new((1..=9).map(f64::from)).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 3.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.q3, 7.0);
        assert_eq!(summary.max, 9.0);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let sorted = FiveNumberSummary::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        let shuffled = FiveNumberSummary::new([3.0, 1.0, 4.0, 2.0]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_duplicate_values() {
        let summary = FiveNumberSummary::new([2.0, 2.0, 2.0, 8.0]).unwrap();
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.q3, 3.5);
        assert_eq!(summary.max, 8.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted_input() {
        let _ = FiveNumberSummary::from_sorted(&[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_five_numbers_are_ordered_on_random_data() {
        let mut rng = Pcg32::seed_from_u64(20_240_817);
        for _ in 0..200 {
            let len: usize = rng.random_range(1..=40);
            let values: Vec<f64> = (0..len).map(|_| rng.random_range(-1e3..1e3)).collect();
            let summary = FiveNumberSummary::new(values).unwrap();
            assert!(
                summary.min <= summary.q1,
                "min {} > q1 {}",
                summary.min,
                summary.q1
            );
            assert!(
                summary.q1 <= summary.median,
                "q1 {} > median {}",
                summary.q1,
                summary.median
            );
            assert!(
                summary.median <= summary.q3,
                "median {} > q3 {}",
                summary.median,
                summary.q3
            );
            assert!(
                summary.q3 <= summary.max,
                "q3 {} > max {}",
                summary.q3,
                summary.max
            );
        }
    }
}
