//! Axis domain derivation.
//!
//! A chart maps data onto a category axis and a value axis. This module
//! computes the data side of both mappings: the ordered category list for a
//! band scale and the rounded numeric endpoints for a linear scale. Where
//! the axes sit on screen and how ticks are labeled is renderer territory.

use std::collections::HashSet;

use vizprep_data::record::{FieldError, Record};

/// Target tick count the nice-rounding step size is chosen for.
const NICE_TICK_COUNT: f64 = 10.0;

/// Rounding passes before nice-rounding gives up on an unstable step.
const MAX_NICE_ITERATIONS: usize = 10;

/// Inclusive endpoints of a linear value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDomain {
    /// Lower endpoint.
    pub start: f64,
    /// Upper endpoint.
    pub end: f64,
}

impl LinearDomain {
    /// Creates the domain `[0, max(values)]`.
    ///
    /// Bar lengths and box positions are only comparable against a zero
    /// baseline, so the lower endpoint is always zero regardless of the
    /// smallest value.
    ///
    /// # Returns
    ///
    /// * `Some(LinearDomain)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use vizprep_chart::scale::LinearDomain;
    /// let domain = LinearDomain::zero_to_max([431.0, 278.0, 120.0]).unwrap();
    /// assert_eq!(domain.start, 0.0);
    /// assert_eq!(domain.end, 431.0);
    /// ```
    #[must_use]
    pub fn zero_to_max<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().reduce(f64::max).map(|max| Self {
            start: 0.0,
            end: max,
        })
    }

    /// Expands both endpoints outward to multiples of a round step.
    ///
    /// The step is 1, 2, or 5 times a power of ten, sized for about
    /// [`NICE_TICK_COUNT`] ticks across the span, and rounding repeats until
    /// the chosen step stabilizes. This reproduces the default axis rounding
    /// of common charting libraries. Spans that never produce a usable step
    /// (zero-width or non-finite) come back unchanged, as does a domain the
    /// iteration cap cuts off.
    ///
    /// # Examples
    ///
    /// ```
    /// use vizprep_chart::scale::LinearDomain;
    ///
    /// let nice = LinearDomain { start: 0.0, end: 433.0 }.nice();
    /// assert_eq!(nice, LinearDomain { start: 0.0, end: 450.0 });
    ///
    /// let nice = LinearDomain { start: 0.0, end: 97.0 }.nice();
    /// assert_eq!(nice, LinearDomain { start: 0.0, end: 100.0 });
    /// ```
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn nice(self) -> Self {
        let reversed = self.end < self.start;
        let (mut start, mut stop) = if reversed {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        // NaN compares unequal to everything, so the first pass never
        // matches prestep
        let mut prestep = f64::NAN;

        for _ in 0..MAX_NICE_ITERATIONS {
            let step = tick_increment(start, stop, NICE_TICK_COUNT);
            if step == prestep {
                return if reversed {
                    Self {
                        start: stop,
                        end: start,
                    }
                } else {
                    Self { start, end: stop }
                };
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }
        self
    }
}

/// Chooses the tick step for a span, negated-reciprocal for sub-unit steps.
///
/// For a raw step of `(stop - start) / count`, the result rounds down to the
/// nearest 1, 2, or 5 times a power of ten. Steps below one are encoded as
/// the negated inverse so callers can stay in exact integer arithmetic when
/// dividing by them.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let e10 = 50.0_f64.sqrt();
    let e5 = 10.0_f64.sqrt();
    let e2 = 2.0_f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    let power = (step.ln() / std::f64::consts::LN_10).floor();
    let error = step / 10.0_f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10.0_f64.powf(power)
    } else {
        -(10.0_f64.powf(-power)) / factor
    }
}

/// Returns the distinct text values of `field` in first-encounter order.
///
/// This is the domain of a band scale: one band per category, laid out in
/// the order categories first occur in the data.
///
/// # Errors
///
/// Fails with a [`FieldError`] on the first record where `field` is absent
/// or holds a number.
///
/// # Examples
///
/// ```
/// use vizprep_chart::scale::band_domain;
/// use vizprep_data::record::Record;
///
/// let records = vec![
///     Record::new().with_field("Platform", "Twitter"),
///     Record::new().with_field("Platform", "TikTok"),
///     Record::new().with_field("Platform", "Twitter"),
/// ];
///
/// let domain = band_domain(&records, "Platform")?;
/// assert_eq!(domain, ["Twitter", "TikTok"]);
/// # Ok::<_, vizprep_data::record::FieldError>(())
/// ```
pub fn band_domain<'a, I>(records: I, field: &str) -> Result<Vec<String>, FieldError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut domain = Vec::new();
    for record in records {
        let value = record.text(field)?;
        if !seen.contains(value) {
            seen.insert(value.to_owned());
            domain.push(value.to_owned());
        }
    }
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod linear_domain {
        use super::*;

        #[test]
        fn test_zero_to_max_ignores_minimum() {
            let domain = LinearDomain::zero_to_max([50.0, 431.0, 120.0]).unwrap();
            assert_eq!(domain.start, 0.0);
            assert_eq!(domain.end, 431.0);
        }

        #[test]
        fn test_zero_to_max_of_empty_input() {
            let values: [f64; 0] = [];
            assert_eq!(LinearDomain::zero_to_max(values), None);
        }

        #[test]
        fn test_nice_expands_to_step_multiples() {
            let nice = LinearDomain {
                start: 0.0,
                end: 433.0,
            }
            .nice();
            assert_eq!(nice.start, 0.0);
            assert_eq!(nice.end, 450.0);
        }

        #[test]
        fn test_nice_rounds_up_to_powers_of_ten() {
            let nice = LinearDomain {
                start: 0.0,
                end: 97.0,
            }
            .nice();
            assert_eq!(nice.end, 100.0);
        }

        #[test]
        fn test_nice_handles_sub_unit_spans() {
            // A fractional span uses the negated-reciprocal step branch
            let nice = LinearDomain {
                start: 0.0,
                end: 0.97,
            }
            .nice();
            assert_eq!(nice.end, 1.0);

            let nice = LinearDomain {
                start: 0.0,
                end: 9.2,
            }
            .nice();
            assert_eq!(nice.end, 10.0);
        }

        #[test]
        fn test_nice_is_a_fixed_point_on_round_domains() {
            let domain = LinearDomain {
                start: 0.0,
                end: 100.0,
            };
            assert_eq!(domain.nice(), domain);

            let domain = LinearDomain {
                start: 0.0,
                end: 1.0,
            };
            assert_eq!(domain.nice(), domain);
        }

        #[test]
        fn test_nice_is_idempotent() {
            let once = LinearDomain {
                start: 0.0,
                end: 433.0,
            }
            .nice();
            assert_eq!(once.nice(), once);
        }

        #[test]
        fn test_nice_leaves_zero_span_unchanged() {
            let domain = LinearDomain {
                start: 5.0,
                end: 5.0,
            };
            assert_eq!(domain.nice(), domain);
        }

        #[test]
        fn test_nice_keeps_reversed_orientation() {
            let nice = LinearDomain {
                start: 0.0,
                end: -97.0,
            }
            .nice();
            assert_eq!(
                nice,
                LinearDomain {
                    start: 0.0,
                    end: -100.0,
                }
            );
        }
    }

    mod band_domain {
        use super::*;

        #[test]
        fn test_dedupes_in_first_encounter_order() {
            let records: Vec<Record> = ["Twitter", "TikTok", "Instagram", "TikTok", "Twitter"]
                .into_iter()
                .map(|platform| Record::new().with_field("Platform", platform))
                .collect();
            let domain = band_domain(&records, "Platform").unwrap();
            assert_eq!(domain, ["Twitter", "TikTok", "Instagram"]);
        }

        #[test]
        fn test_empty_records() {
            let records: Vec<Record> = Vec::new();
            let domain = band_domain(&records, "Platform").unwrap();
            assert!(domain.is_empty());
        }

        #[test]
        fn test_missing_field_fails() {
            let records = vec![Record::new().with_field("Likes", 1.0)];
            let err = band_domain(&records, "Platform").unwrap_err();
            assert!(matches!(err, FieldError::Missing { field } if field == "Platform"));
        }

        #[test]
        fn test_numeric_field_fails() {
            let records = vec![Record::new().with_field("Platform", 1.0)];
            let err = band_domain(&records, "Platform").unwrap_err();
            assert!(matches!(err, FieldError::NotText { field } if field == "Platform"));
        }
    }
}
