//! Chart specifications for the avocado dashboard.
//!
//! Each builder turns a filtered subset of observations into a
//! [`models::ChartSpec`], a serializable plotly figure. The builders are
//! pure functions over borrowed data, so one `Dataset` can serve any number
//! of concurrent requests.
//!
//! # Usage
//!
//! ```rust
//! use avo_chart::render::{render, ChartKind, RenderRequest};
//! use avo_data::dataset::Dataset;
//!
//! let dataset = Dataset::from_csv_str(
//!     "Date,AveragePrice,Total Volume,Total Bags,Small Bags,Large Bags,XLarge Bags,type,year,region\n\
//!      2015-01-04,1.64,1500.0,525.0,450.0,75.0,0.0,organic,2015,Albany\n",
//! )
//! .unwrap();
//!
//! let spec = render(&dataset, &RenderRequest::defaults(&dataset, ChartKind::Price));
//! assert_eq!(spec.data.len(), 1);
//! assert_eq!(spec.layout.title.text, "Average Price of Avocados");
//! ```
//!
//! # Charts
//!
//! - [`line::price_chart`] / [`line::volume_chart`] - time series for one region and type
//! - [`scatter::scatter_chart`] - one numeric column against another, per type
//! - [`box_plot::box_plot_chart`] - distribution of a column by type, region or year

pub mod box_plot;
mod group;
pub mod line;
pub mod models;
pub mod render;
pub mod scatter;
pub mod style;
