//! Grouped statistics over record tables.
//!
//! Aggregation reads a prepared [`Table`] and produces the figures a chart
//! draws: one five-number summary per category for box plots, one mean per
//! (group, subgroup) cell for grouped bars. Group iteration order is always
//! the order keys first occur in the input, never alphabetical.
//!
//! All operations here are pure: running one twice over the same table
//! yields identical results.

use vizprep_data::{
    group::{OrderedGroups, group_by_field},
    record::FieldError,
    table::Table,
};
use vizprep_stats::{descriptive, summary::FiveNumberSummary};

/// Error raised when an aggregation cannot be computed.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AggregateError {
    /// A summary was requested over zero records.
    #[display("cannot summarize an empty record set")]
    EmptyInput,
    /// A record could not provide a field the aggregation needs.
    #[display("{_0}")]
    Field(FieldError),
}

/// One (group, subgroup) cell of a grouped-mean aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    /// Outer group key.
    pub group: String,
    /// Inner subgroup key.
    pub subgroup: String,
    /// Arithmetic mean of the value field over the cell's records.
    pub mean: f64,
}

/// Per-group five-number summaries, iterating groups in first-encounter
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSummaries {
    /// Group-summary pairs in first-encounter order of the groups.
    entries: Vec<(String, FiveNumberSummary)>,
}

impl GroupedSummaries {
    /// Returns the summary for `group`, or `None` for an unknown group.
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&FiveNumberSummary> {
        self.entries.iter().find_map(|(key, summary)| {
            if key.as_str() == group {
                Some(summary)
            } else {
                None
            }
        })
    }

    /// Returns the group keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over `(group, summary)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FiveNumberSummary)> {
        self.entries
            .iter()
            .map(|(key, summary)| (key.as_str(), summary))
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the input contained no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for GroupedSummaries {
    type Item = (String, FiveNumberSummary);
    type IntoIter = std::vec::IntoIter<(String, FiveNumberSummary)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Computes a five-number summary over a numeric column.
///
/// # Errors
///
/// Fails with [`AggregateError::EmptyInput`] on an empty table and
/// [`AggregateError::Field`] when a record is missing the field or holds
/// text under it.
///
/// # Examples
///
/// ```
/// use vizprep_chart::aggregate;
/// use vizprep_data::{record::Record, table::Table};
///
/// let table: Table = (1..=9)
///     .map(|likes| Record::new().with_field("Likes", f64::from(likes)))
///     .collect();
///
/// let summary = aggregate::five_number_summary(&table, "Likes")?;
/// assert_eq!(summary.q1, 3.0);
/// assert_eq!(summary.median, 5.0);
/// assert_eq!(summary.q3, 7.0);
/// # Ok::<_, vizprep_chart::aggregate::AggregateError>(())
/// ```
pub fn five_number_summary(
    table: &Table,
    value_field: &str,
) -> Result<FiveNumberSummary, AggregateError> {
    let values = table.numbers(value_field).map_err(AggregateError::Field)?;
    FiveNumberSummary::new(values).ok_or(AggregateError::EmptyInput)
}

/// Computes one five-number summary per distinct value of `group_field`.
///
/// Groups appear in first-encounter order. A group exists only if at least
/// one record carries its key, so every summary is over a non-empty set.
/// An empty table yields an empty result rather than an error.
///
/// # Errors
///
/// Fails with [`AggregateError::Field`] when a record is missing either
/// field or holds the wrong type under it.
///
/// # Examples
///
/// ```
/// use vizprep_chart::aggregate;
/// use vizprep_data::{record::Record, table::Table};
///
/// let table: Table = [("TikTok", 431.0), ("Twitter", 278.0), ("TikTok", 120.0)]
///     .into_iter()
///     .map(|(platform, likes)| {
///         Record::new()
///             .with_field("Platform", platform)
///             .with_field("Likes", likes)
///     })
///     .collect();
///
/// let summaries = aggregate::grouped_summaries(&table, "Platform", "Likes")?;
/// assert_eq!(summaries.len(), 2);
/// assert_eq!(summaries.get("TikTok").unwrap().max, 431.0);
/// # Ok::<_, vizprep_chart::aggregate::AggregateError>(())
/// ```
pub fn grouped_summaries(
    table: &Table,
    group_field: &str,
    value_field: &str,
) -> Result<GroupedSummaries, AggregateError> {
    let groups = group_by_field(table, group_field).map_err(AggregateError::Field)?;
    let mut entries = Vec::with_capacity(groups.len());
    for (group, records) in groups.iter() {
        let mut values = Vec::with_capacity(records.len());
        for record in records {
            values.push(record.number(value_field).map_err(AggregateError::Field)?);
        }
        let summary = FiveNumberSummary::new(values).expect("Groups should never be empty");
        entries.push((group.clone(), summary));
    }
    Ok(GroupedSummaries { entries })
}

/// Computes the mean of `value_field` per (group, subgroup) cell.
///
/// Entries come back ordered by first encounter of the group, then first
/// encounter of the subgroup within that group. Cells with no records never
/// appear. An empty table yields an empty result rather than an error.
///
/// # Errors
///
/// Fails with [`AggregateError::Field`] when a record is missing any of the
/// three fields or holds the wrong type under one.
///
/// # Examples
///
/// ```
/// use vizprep_chart::aggregate;
/// use vizprep_data::{record::Record, table::Table};
///
/// let table: Table = [
///     ("TikTok", "Video", 10.0),
///     ("TikTok", "Video", 20.0),
///     ("Twitter", "Text", 5.0),
/// ]
/// .into_iter()
/// .map(|(platform, post_type, likes)| {
///     Record::new()
///         .with_field("Platform", platform)
///         .with_field("PostType", post_type)
///         .with_field("Likes", likes)
/// })
/// .collect();
///
/// let entries = aggregate::grouped_means(&table, "Platform", "PostType", "Likes")?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].mean, 15.0);
/// assert_eq!(entries[1].mean, 5.0);
/// # Ok::<_, vizprep_chart::aggregate::AggregateError>(())
/// ```
pub fn grouped_means(
    table: &Table,
    group_field: &str,
    subgroup_field: &str,
    value_field: &str,
) -> Result<Vec<AggregateEntry>, AggregateError> {
    let groups = group_by_field(table, group_field).map_err(AggregateError::Field)?;
    let mut entries = Vec::new();
    for (group, records) in groups.iter() {
        let mut subgroups: OrderedGroups<String, f64> = OrderedGroups::new();
        for record in records {
            let subgroup = record.text(subgroup_field).map_err(AggregateError::Field)?;
            let value = record.number(value_field).map_err(AggregateError::Field)?;
            subgroups.push(subgroup.to_owned(), value);
        }
        for (subgroup, values) in subgroups {
            let mean = descriptive::mean(values).expect("Subgroups should never be empty");
            entries.push(AggregateEntry {
                group: group.clone(),
                subgroup,
                mean,
            });
        }
    }
    Ok(entries)
}
