/// Computes the arithmetic mean of a dataset.
///
/// # Arguments
///
/// * `values` - An iterator over `f64` values
///
/// # Returns
///
/// * `Some(mean)` - if the dataset contains at least one value
/// * `None` - if the dataset is empty
///
/// # Examples
///
/// ```
/// use vizprep_stats::descriptive::mean;
///
/// assert_eq!(mean([10.0, 20.0, 30.0]), Some(20.0));
///
/// let empty: [f64; 0] = [];
/// assert_eq!(mean(empty), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count: usize = 0;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
