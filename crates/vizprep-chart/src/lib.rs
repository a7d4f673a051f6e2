//! Chart data preparation for record tables.
//!
//! This crate turns flat tables of records into the numbers a chart renderer
//! needs: per-group five-number summaries for box plots, per-(group,
//! subgroup) means for grouped bar charts, raw point sequences for line
//! charts, and the axis domains to draw them against. Drawing itself stays
//! behind the [`render::ChartRenderer`] seam; nothing here knows about
//! pixels, ticks, or color.
//!
//! # Pipeline Overview
//!
//! ```text
//! Table (vizprep-data)
//!   ↓ aggregate: grouped summaries / grouped means
//!   ↓ scale: band domains + nice-rounded linear domains
//!   ↓ box_plot / grouped_bar / line_chart: per-chart assembly
//!   ↓ render: hand prepared data to a ChartRenderer
//! ```
//!
//! # Modules
//!
//! - [`aggregate`]: Grouped statistics over record tables
//! - [`scale`]: Band and linear axis domains
//! - [`box_plot`]: Box plot preparation
//! - [`grouped_bar`]: Grouped bar chart preparation
//! - [`line_chart`]: Line chart preparation
//! - [`render`]: The renderer seam and chart driver functions
//!
//! # Examples
//!
//! ```
//! use vizprep_chart::box_plot::{BoxPlotConfig, BoxPlotData};
//! use vizprep_data::table::Table;
//!
//! let mut table: Table = serde_json::from_str(
//!     r#"[
//!         { "Platform": "TikTok", "Likes": "431" },
//!         { "Platform": "Twitter", "Likes": "278" },
//!         { "Platform": "TikTok", "Likes": "120" }
//!     ]"#,
//! )?;
//! table.coerce_number("Likes")?;
//!
//! let config = BoxPlotConfig::new("Platform", "Likes");
//! let data = BoxPlotData::prepare(&table, &config)?;
//!
//! assert_eq!(data.groups, ["TikTok", "Twitter"]);
//! assert_eq!(data.value_domain.end, 450.0);
//! assert_eq!(data.summaries.len(), 2);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod box_plot;
pub mod grouped_bar;
pub mod line_chart;
pub mod render;
pub mod scale;
