use vizprep_data::table::Table;

use crate::{
    aggregate::AggregateError,
    box_plot::{BoxPlotConfig, BoxPlotData},
    grouped_bar::{GroupedBarConfig, GroupedBarData},
    line_chart::{LineChartConfig, LineChartData},
};

/// External rendering collaborator for prepared chart data.
///
/// The preparation layer computes numbers and hands them across this seam;
/// everything visual (geometry, ticks, legends, color) belongs to the
/// implementor. Drawing reports nothing back to the caller: a renderer owns
/// its own failure handling.
///
/// ```
/// use vizprep_chart::box_plot::BoxPlotData;
/// use vizprep_chart::grouped_bar::GroupedBarData;
/// use vizprep_chart::line_chart::LineChartData;
/// use vizprep_chart::render::ChartRenderer;
///
/// struct TextRenderer {
///     lines: Vec<String>,
/// }
///
/// impl ChartRenderer for TextRenderer {
///     fn draw_box_plot(&mut self, data: &BoxPlotData) {
///         for (group, summary) in data.summaries.iter() {
///             self.lines.push(format!("{group}: median {}", summary.median));
///         }
///     }
///
///     fn draw_grouped_bars(&mut self, data: &GroupedBarData) {
///         for entry in &data.entries {
///             self.lines
///                 .push(format!("{}/{}: {}", entry.group, entry.subgroup, entry.mean));
///         }
///     }
///
///     fn draw_line_chart(&mut self, data: &LineChartData) {
///         for point in &data.points {
///             self.lines.push(format!("{}: {}", point.x, point.value));
///         }
///     }
/// }
/// ```
pub trait ChartRenderer {
    /// Draws a box plot from prepared data.
    fn draw_box_plot(&mut self, data: &BoxPlotData);

    /// Draws a grouped bar chart from prepared data.
    fn draw_grouped_bars(&mut self, data: &GroupedBarData);

    /// Draws a line chart from prepared data.
    fn draw_line_chart(&mut self, data: &LineChartData);
}

/// Prepares box plot data from `table` and draws it on `renderer`.
///
/// # Errors
///
/// Propagates preparation errors; the renderer is not called on failure.
pub fn render_box_plot<R>(
    table: &Table,
    config: &BoxPlotConfig,
    renderer: &mut R,
) -> Result<(), AggregateError>
where
    R: ChartRenderer + ?Sized,
{
    let data = BoxPlotData::prepare(table, config)?;
    renderer.draw_box_plot(&data);
    Ok(())
}

/// Prepares grouped bar data from `table` and draws it on `renderer`.
///
/// # Errors
///
/// Propagates preparation errors; the renderer is not called on failure.
pub fn render_grouped_bars<R>(
    table: &Table,
    config: &GroupedBarConfig,
    renderer: &mut R,
) -> Result<(), AggregateError>
where
    R: ChartRenderer + ?Sized,
{
    let data = GroupedBarData::prepare(table, config)?;
    renderer.draw_grouped_bars(&data);
    Ok(())
}

/// Prepares line chart data from `table` and draws it on `renderer`.
///
/// # Errors
///
/// Propagates preparation errors; the renderer is not called on failure.
pub fn render_line_chart<R>(
    table: &Table,
    config: &LineChartConfig,
    renderer: &mut R,
) -> Result<(), AggregateError>
where
    R: ChartRenderer + ?Sized,
{
    let data = LineChartData::prepare(table, config)?;
    renderer.draw_line_chart(&data);
    Ok(())
}
