//! The boundary the presentation shell talks to.
//!
//! A [`RenderRequest`] carries the raw control values as strings. It is
//! parsed into typed filter parameters and a [`ChartRequest`], the subset is
//! selected, and the matching builder runs. [`render`] never fails: bad
//! input becomes an error chart and an empty subset becomes the no-data
//! placeholder.

use std::{fmt, str::FromStr};

use avo_data::dataset::Dataset;
use avo_data::date_range::DateRange;
use avo_data::error::InputError;
use avo_data::filter::{select, select_for_box_plot, FilterParams, GroupBy};
use avo_data::observation::{AvocadoType, NumericColumn, Observation};
use avo_utils::dates::{format_date, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::box_plot::box_plot_chart;
use crate::line::{price_chart, volume_chart};
use crate::models::ChartSpec;
use crate::scatter::scatter_chart;

pub const DEFAULT_X_COLUMN: NumericColumn = NumericColumn::AveragePrice;
pub const DEFAULT_Y_COLUMN: NumericColumn = NumericColumn::TotalVolume;
pub const DEFAULT_BOX_COLUMN: NumericColumn = NumericColumn::AveragePrice;
pub const DEFAULT_GROUP_BY: GroupBy = GroupBy::Type;

/// Reasons a request cannot be turned into a chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown chart '{0}'")]
    UnknownChart(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),
}

/// The four chart families of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Price,
    Volume,
    Scatter,
    Box,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Price, ChartKind::Volume, ChartKind::Scatter, ChartKind::Box];

    pub fn key(&self) -> &'static str {
        match self {
            ChartKind::Price => "price",
            ChartKind::Volume => "volume",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| RenderError::UnknownChart(s.to_string()))
    }
}

/// Raw control values as the shell sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub chart: String,
    pub region: String,
    #[serde(rename = "type")]
    pub avocado_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
}

impl RenderRequest {
    /// The request the dashboard issues on first load for `chart`.
    pub fn defaults(dataset: &Dataset, chart: ChartKind) -> Self {
        let params = FilterParams::defaults(dataset);
        let mut request = RenderRequest {
            chart: chart.key().to_string(),
            region: params.region,
            avocado_type: params.avocado_type.as_str().to_string(),
            start_date: format_date(&params.date_range.start()),
            end_date: format_date(&params.date_range.end()),
            ..Default::default()
        };
        match chart {
            ChartKind::Price | ChartKind::Volume => {}
            ChartKind::Scatter => {
                request.x_column = Some(DEFAULT_X_COLUMN.name().to_string());
                request.y_column = Some(DEFAULT_Y_COLUMN.name().to_string());
            }
            ChartKind::Box => {
                request.column = Some(DEFAULT_BOX_COLUMN.name().to_string());
                request.group_by = Some(DEFAULT_GROUP_BY.key().to_string());
            }
        }
        request
    }

    /// Typed filter parameters; the chart-specific fields are ignored.
    pub fn filter_params(&self) -> Result<FilterParams, RenderError> {
        let region = required("region", &self.region)?;
        let avocado_type: AvocadoType = required("type", &self.avocado_type)?.parse()?;
        let start = date_param("start_date", &self.start_date)?;
        let end = date_param("end_date", &self.end_date)?;
        Ok(FilterParams::new(region, avocado_type, DateRange::new(start, end)?))
    }
}

/// A parsed chart choice with its chart-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRequest {
    Price,
    Volume,
    Scatter { x: NumericColumn, y: NumericColumn },
    Box { column: NumericColumn, group_by: GroupBy },
}

/// Validate every field of `request`.
pub fn parse_request(request: &RenderRequest) -> Result<(FilterParams, ChartRequest), RenderError> {
    let params = request.filter_params()?;
    let chart = match request.chart.parse::<ChartKind>()? {
        ChartKind::Price => ChartRequest::Price,
        ChartKind::Volume => ChartRequest::Volume,
        ChartKind::Scatter => ChartRequest::Scatter {
            x: optional("x_column", &request.x_column)?.parse()?,
            y: optional("y_column", &request.y_column)?.parse()?,
        },
        ChartKind::Box => ChartRequest::Box {
            column: optional("column", &request.column)?.parse()?,
            group_by: optional("group_by", &request.group_by)?.parse()?,
        },
    };
    Ok((params, chart))
}

/// Select the rows `chart` needs and build it.
pub fn build_chart(dataset: &Dataset, params: &FilterParams, chart: ChartRequest) -> ChartSpec {
    let subset = match chart {
        ChartRequest::Box { group_by, .. } => select_for_box_plot(dataset, params, group_by),
        _ => select(dataset, params),
    };
    build_from_subset(&subset, chart)
}

fn build_from_subset(subset: &[&Observation], chart: ChartRequest) -> ChartSpec {
    if subset.is_empty() {
        return ChartSpec::no_data();
    }
    match chart {
        ChartRequest::Price => price_chart(subset),
        ChartRequest::Volume => volume_chart(subset),
        ChartRequest::Scatter { x, y } => scatter_chart(subset, x, y),
        ChartRequest::Box { column, group_by } => box_plot_chart(subset, column, group_by),
    }
}

/// Like [`render`] but reports invalid input to the caller.
pub fn try_render(dataset: &Dataset, request: &RenderRequest) -> Result<ChartSpec, RenderError> {
    let (params, chart) = parse_request(request)?;
    log::debug!(
        "render: {:?} for {} / {} from {} to {}",
        chart,
        params.region,
        params.avocado_type,
        params.date_range.start(),
        params.date_range.end()
    );
    Ok(build_chart(dataset, &params, chart))
}

/// Chart for `request`. Never fails.
pub fn render(dataset: &Dataset, request: &RenderRequest) -> ChartSpec {
    try_render(dataset, request).unwrap_or_else(|e| contained(&request.chart, &e))
}

/// Price and volume charts from a single selection, as the dashboard's
/// overview cards show them. The `chart` field of `request` is ignored.
pub fn render_overview(dataset: &Dataset, request: &RenderRequest) -> (ChartSpec, ChartSpec) {
    match request.filter_params() {
        Ok(params) => {
            let subset = select(dataset, &params);
            (
                build_from_subset(&subset, ChartRequest::Price),
                build_from_subset(&subset, ChartRequest::Volume),
            )
        }
        Err(e) => {
            let spec = contained("overview", &e);
            (spec.clone(), spec)
        }
    }
}

/// Every chart of the dashboard for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub price: ChartSpec,
    pub volume: ChartSpec,
    pub scatter: ChartSpec,
    #[serde(rename = "box")]
    pub box_plot: ChartSpec,
}

/// All four charts. Chart-specific fields missing from `request` take the
/// dashboard's initial values.
pub fn render_dashboard(dataset: &Dataset, request: &RenderRequest) -> DashboardCharts {
    let (price, volume) = render_overview(dataset, request);
    let scatter = render(
        dataset,
        &RenderRequest {
            chart: ChartKind::Scatter.key().to_string(),
            x_column: request.x_column.clone().or_else(|| Some(DEFAULT_X_COLUMN.name().to_string())),
            y_column: request.y_column.clone().or_else(|| Some(DEFAULT_Y_COLUMN.name().to_string())),
            ..request.clone()
        },
    );
    let box_plot = render(
        dataset,
        &RenderRequest {
            chart: ChartKind::Box.key().to_string(),
            column: request.column.clone().or_else(|| Some(DEFAULT_BOX_COLUMN.name().to_string())),
            group_by: request.group_by.clone().or_else(|| Some(DEFAULT_GROUP_BY.key().to_string())),
            ..request.clone()
        },
    );
    DashboardCharts {
        price,
        volume,
        scatter,
        box_plot,
    }
}

fn contained(chart: &str, error: &RenderError) -> ChartSpec {
    log::warn!("render: {} chart failed: {}", chart, error);
    ChartSpec::error(&error.to_string())
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, RenderError> {
    let value = value.trim();
    if value.is_empty() {
        Err(RenderError::MissingParameter(name))
    } else {
        Ok(value)
    }
}

fn optional<'a>(name: &'static str, value: &'a Option<String>) -> Result<&'a str, RenderError> {
    required(name, value.as_deref().unwrap_or_default())
}

fn date_param(name: &'static str, value: &str) -> Result<NaiveDate, RenderError> {
    let value = required(name, value)?;
    parse_date(value).map_err(|_| RenderError::InvalidDate(value.to_string()))
}
