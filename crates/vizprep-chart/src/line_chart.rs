use vizprep_data::table::Table;

use crate::{
    aggregate::AggregateError,
    scale::{self, LinearDomain},
};

/// Field selection for a line chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChartConfig {
    /// Field whose values become the ordered positions along the x axis.
    pub x_field: String,
    /// Numeric field plotted at each position.
    pub value_field: String,
}

impl LineChartConfig {
    /// Creates a config from field names.
    #[must_use]
    pub fn new<X, V>(x_field: X, value_field: V) -> Self
    where
        X: Into<String>,
        V: Into<String>,
    {
        Self {
            x_field: x_field.into(),
            value_field: value_field.into(),
        }
    }
}

/// One plotted point: an x category and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    /// Position along the x axis.
    pub x: String,
    /// Plotted value.
    pub value: f64,
}

/// Chart-ready line chart data.
///
/// The x axis is categorical: positions are laid out in first-encounter
/// order, not parsed or sorted as dates or numbers. Points keep the input
/// order and are not aggregated, so repeated x values plot as separate
/// points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartData {
    /// X axis domain in first-encounter order.
    pub x_domain: Vec<String>,
    /// Value axis domain, zero-based and nice-rounded.
    pub value_domain: LinearDomain,
    /// Points in input order.
    pub points: Vec<LinePoint>,
}

impl LineChartData {
    /// Prepares line chart data from raw records.
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
    /// use vizprep_chart::line_chart::{LineChartConfig, LineChartData};
    /// use vizprep_data::{record::Record, table::Table};
    ///
    /// let table: Table = [("01/24/2025", 431.0), ("01/25/2025", 278.0)]
    ///     .into_iter()
    ///     .map(|(date, likes)| {
    ///         Record::new()
    ///             .with_field("Date", date)
    ///             .with_field("Likes", likes)
    ///     })
    ///     .collect();
    ///
    /// let config = LineChartConfig::new("Date", "Likes");
    /// let data = LineChartData::prepare(&table, &config)?;
    /// assert_eq!(data.x_domain, ["01/24/2025", "01/25/2025"]);
    /// assert_eq!(data.points.len(), 2);
    /// # Ok::<_, vizprep_chart::aggregate::AggregateError>(())
    /// ```
    pub fn prepare(table: &Table, config: &LineChartConfig) -> Result<Self, AggregateError> {
        let mut points = Vec::with_capacity(table.len());
        for record in table {
            let x = record.text(&config.x_field).map_err(AggregateError::Field)?;
            let value = record
                .number(&config.value_field)
                .map_err(AggregateError::Field)?;
            points.push(LinePoint {
                x: x.to_owned(),
                value,
            });
        }
        let value_domain = LinearDomain::zero_to_max(points.iter().map(|point| point.value))
            .ok_or(AggregateError::EmptyInput)?
            .nice();
        let x_domain = scale::band_domain(table, &config.x_field).map_err(AggregateError::Field)?;
        Ok(Self {
            x_domain,
            value_domain,
            points,
        })
    }
}
