/// Computes a single quantile from sorted data using linear interpolation.
///
/// For `n` sorted values and probability `p`, the quantile sits at the
/// fractional rank `p * (n - 1)`. When that rank falls between two entries,
/// the result is interpolated linearly between them. This is the estimator
/// most charting and spreadsheet tools use for quartiles (type 7 in the R
/// taxonomy), so box plots built on it line up with what those tools draw.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The probability to estimate, normally within `0.0..=1.0`
///
/// # Returns
///
/// The estimated quantile. Returns `f64::NAN` if the input is empty.
/// Probabilities at or beyond the ends of the unit interval return the first
/// and last entry respectively.
///
/// # Examples
///
/// ```
/// use vizprep_stats::quantile::compute_quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
///
/// assert_eq!(compute_quantile(&values, 0.25), 3.0);
/// assert_eq!(compute_quantile(&values, 0.5), 5.0);
/// assert_eq!(compute_quantile(&values, 0.75), 7.0);
///
/// // Ranks that fall between entries interpolate linearly.
/// let values = [10.0, 20.0];
/// assert_eq!(compute_quantile(&values, 0.25), 12.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_quantile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n < 2 || p <= 0.0 {
        return sorted_values[0];
    }
    if p >= 1.0 {
        return sorted_values[n - 1];
    }
    let rank = (n - 1) as f64 * p;
    let index = rank as usize;
    let fraction = rank - index as f64;
    let below = sorted_values[index];
    let above = sorted_values[index + 1];
    below + (above - below) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_nan() {
        assert!(compute_quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_single_value() {
        // With one entry every probability lands on it
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(compute_quantile(&[7.5], p), 7.5);
        }
    }

    #[test]
    fn test_quartiles_land_on_entries_for_nine_values() {
        // (n - 1) * p is a whole number for n = 9, so no interpolation happens
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(compute_quantile(&values, 0.25), 3.0);
        assert_eq!(compute_quantile(&values, 0.5), 5.0);
        assert_eq!(compute_quantile(&values, 0.75), 7.0);
    }

    #[test]
    fn test_quartiles_interpolate_for_four_values() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(compute_quantile(&values, 0.25), 1.75);
        assert_eq!(compute_quantile(&values, 0.5), 2.5);
        assert_eq!(compute_quantile(&values, 0.75), 3.25);
    }

    #[test]
    fn test_probabilities_clamp_to_ends() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(compute_quantile(&values, 0.0), 1.0);
        assert_eq!(compute_quantile(&values, -0.5), 1.0);
        assert_eq!(compute_quantile(&values, 1.0), 3.0);
        assert_eq!(compute_quantile(&values, 1.5), 3.0);
    }

    #[test]
    fn test_median_of_even_count_is_midpoint() {
        let values = [10.0, 20.0];
        assert_eq!(compute_quantile(&values, 0.5), 15.0);
    }

    #[test]
    fn test_unevenly_spaced_values() {
        // Rank 0.75 * 3 = 2.25 sits a quarter of the way from 50 to 300
        let values = [1.0, 2.0, 50.0, 300.0];
        assert_eq!(compute_quantile(&values, 0.75), 112.5);
    }
}
