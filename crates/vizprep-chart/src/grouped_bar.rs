use vizprep_data::table::Table;

use crate::{
    aggregate::{self, AggregateEntry, AggregateError},
    scale::{self, LinearDomain},
};

/// Field selection for a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedBarConfig {
    /// Field whose distinct values become the outer category bands.
    pub group_field: String,
    /// Field whose distinct values become the bars within each band.
    pub subgroup_field: String,
    /// Numeric field averaged per (group, subgroup) cell.
    pub value_field: String,
}

impl GroupedBarConfig {
    /// Creates a config from field names.
    #[must_use]
    pub fn new<G, S, V>(group_field: G, subgroup_field: S, value_field: V) -> Self
    where
        G: Into<String>,
        S: Into<String>,
        V: Into<String>,
    {
        Self {
            group_field: group_field.into(),
            subgroup_field: subgroup_field.into(),
            value_field: value_field.into(),
        }
    }
}

/// Chart-ready grouped bar data: one bar per (group, subgroup) cell.
///
/// Bar heights are means computed here from the raw records. A table that
/// arrives pre-averaged (one record per cell) passes through unchanged,
/// since the mean of a single value is that value.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarData {
    /// Outer category axis domain in first-encounter order.
    pub groups: Vec<String>,
    /// Inner category domain in first-encounter order over the whole table.
    pub subgroups: Vec<String>,
    /// Value axis domain, zero-based and nice-rounded over the bar heights.
    pub value_domain: LinearDomain,
    /// One entry per non-empty cell, groups outermost.
    pub entries: Vec<AggregateEntry>,
}

impl GroupedBarData {
    /// Prepares grouped bar data from raw records.
    ///
    /// # Errors
    ///
    /// Fails with [`AggregateError::EmptyInput`] on an empty table and
    /// [`AggregateError::Field`] when a record is missing one of the
    /// configured fields or holds the wrong type under it.
    ///
    /// # Examples
    ///
    /// ```
    /// use vizprep_chart::grouped_bar::{GroupedBarConfig, GroupedBarData};
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
    /// let config = GroupedBarConfig::new("Platform", "PostType", "Likes");
    /// let data = GroupedBarData::prepare(&table, &config)?;
    /// assert_eq!(data.entries.len(), 2);
    /// assert_eq!(data.entries[0].mean, 15.0);
    /// # Ok::<_, vizprep_chart::aggregate::AggregateError>(())
    /// ```
    pub fn prepare(table: &Table, config: &GroupedBarConfig) -> Result<Self, AggregateError> {
        let entries = aggregate::grouped_means(
            table,
            &config.group_field,
            &config.subgroup_field,
            &config.value_field,
        )?;
        let value_domain = LinearDomain::zero_to_max(entries.iter().map(|entry| entry.mean))
            .ok_or(AggregateError::EmptyInput)?
            .nice();
        let groups =
            scale::band_domain(table, &config.group_field).map_err(AggregateError::Field)?;
        let subgroups =
            scale::band_domain(table, &config.subgroup_field).map_err(AggregateError::Field)?;
        Ok(Self {
            groups,
            subgroups,
            value_domain,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use vizprep_data::record::Record;

    use super::*;

    fn post_table() -> Table {
        [
            ("Twitter", "Text", 30.0),
            ("TikTok", "Video", 400.0),
            ("Twitter", "Video", 250.0),
            ("TikTok", "Video", 420.0),
            ("TikTok", "Image", 96.0),
        ]
        .into_iter()
        .map(|(platform, post_type, likes)| {
            Record::new()
                .with_field("Platform", platform)
                .with_field("PostType", post_type)
                .with_field("Likes", likes)
        })
        .collect()
    }

    #[test]
    fn test_prepare_assembles_all_parts() {
        let table = post_table();
        let config = GroupedBarConfig::new("Platform", "PostType", "Likes");
        let data = GroupedBarData::prepare(&table, &config).unwrap();

        assert_eq!(data.groups, ["Twitter", "TikTok"]);
        // Subgroup domain spans the whole table, not one group
        assert_eq!(data.subgroups, ["Text", "Video", "Image"]);

        let cells: Vec<_> = data
            .entries
            .iter()
            .map(|entry| (entry.group.as_str(), entry.subgroup.as_str(), entry.mean))
            .collect();
        assert_eq!(
            cells,
            [
                ("Twitter", "Text", 30.0),
                ("Twitter", "Video", 250.0),
                ("TikTok", "Video", 410.0),
                ("TikTok", "Image", 96.0),
            ]
        );
    }

    #[test]
    fn test_value_domain_covers_means_not_raw_values() {
        let table = post_table();
        let config = GroupedBarConfig::new("Platform", "PostType", "Likes");
        let data = GroupedBarData::prepare(&table, &config).unwrap();

        // Largest mean is 410, largest raw value 420; the domain tops out
        // above the mean
        assert_eq!(
            data.value_domain,
            LinearDomain {
                start: 0.0,
                end: 450.0,
            }
        );
    }

    #[test]
    fn test_pre_averaged_table_passes_through() {
        let table: Table = [("TikTok", "Video", 410.0), ("Twitter", "Text", 30.0)]
            .into_iter()
            .map(|(platform, post_type, avg_likes)| {
                Record::new()
                    .with_field("Platform", platform)
                    .with_field("PostType", post_type)
                    .with_field("AvgLikes", avg_likes)
            })
            .collect();
        let config = GroupedBarConfig::new("Platform", "PostType", "AvgLikes");
        let data = GroupedBarData::prepare(&table, &config).unwrap();

        assert_eq!(data.entries[0].mean, 410.0);
        assert_eq!(data.entries[1].mean, 30.0);
    }

    #[test]
    fn test_empty_table_fails() {
        let table = Table::new();
        let config = GroupedBarConfig::new("Platform", "PostType", "Likes");
        let err = GroupedBarData::prepare(&table, &config).unwrap_err();
        assert!(matches!(err, AggregateError::EmptyInput));
    }
}
