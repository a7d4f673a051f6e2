use vizprep_data::table::Table;

use crate::{
    aggregate::{self, AggregateError, GroupedSummaries},
    scale::{self, LinearDomain},
};

/// Field selection for a box plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxPlotConfig {
    /// Field whose distinct values become the category bands.
    pub group_field: String,
    /// Numeric field summarized per category.
    pub value_field: String,
}

impl BoxPlotConfig {
    /// Creates a config from field names.
    #[must_use]
    pub fn new<G, V>(group_field: G, value_field: V) -> Self
    where
        G: Into<String>,
        V: Into<String>,
    {
        Self {
            group_field: group_field.into(),
            value_field: value_field.into(),
        }
    }
}

/// Chart-ready box plot data: one five-number summary per category band.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotData {
    /// Category axis domain in first-encounter order.
    pub groups: Vec<String>,
    /// Value axis domain, zero-based and nice-rounded over the raw values.
    pub value_domain: LinearDomain,
    /// Per-category five-number summaries, keyed like `groups`.
    pub summaries: GroupedSummaries,
}

impl BoxPlotData {
    /// Prepares box plot data from raw records.
    ///
    /// The value domain covers the raw values, not the summary extremes, so
    /// whiskers always fit inside it.
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
    /// use vizprep_chart::box_plot::{BoxPlotConfig, BoxPlotData};
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
    /// let config = BoxPlotConfig::new("Platform", "Likes");
    /// let data = BoxPlotData::prepare(&table, &config)?;
    /// assert_eq!(data.groups, ["TikTok", "Twitter"]);
    /// assert_eq!(data.value_domain.end, 450.0);
    /// # Ok::<_, vizprep_chart::aggregate::AggregateError>(())
    /// ```
    pub fn prepare(table: &Table, config: &BoxPlotConfig) -> Result<Self, AggregateError> {
        let values = table
            .numbers(&config.value_field)
            .map_err(AggregateError::Field)?;
        let value_domain = LinearDomain::zero_to_max(values)
            .ok_or(AggregateError::EmptyInput)?
            .nice();
        let groups =
            scale::band_domain(table, &config.group_field).map_err(AggregateError::Field)?;
        let summaries =
            aggregate::grouped_summaries(table, &config.group_field, &config.value_field)?;
        Ok(Self {
            groups,
            value_domain,
            summaries,
        })
    }
}
