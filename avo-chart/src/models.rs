//! Chart specification structs.
//!
//! All structs derive `Serialize` and produce the plotly figure shape
//! (`{"data": [...], "layout": {...}}`) expected by the dashboard front end.
//! Optional fields are left out of the JSON when unset.

use chrono::NaiveDate;
use serde::Serialize;

/// Title of the placeholder chart shown when a filter matches nothing.
pub const NO_DATA_TITLE: &str = "No data available for selected filters";

/// Hint shown in the middle of the placeholder chart.
pub const NO_DATA_HINT: &str = "Try adjusting your filters";

/// One complete chart: its traces and their layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Placeholder for a filter combination with no matching rows.
    pub fn no_data() -> Self {
        ChartSpec {
            data: Vec::new(),
            layout: Layout {
                title: Title::plain(NO_DATA_TITLE),
                annotations: Some(vec![Annotation::centered(NO_DATA_HINT)]),
                ..Default::default()
            },
        }
    }

    /// Chart carrying a failure message in place of data.
    pub fn error(message: &str) -> Self {
        ChartSpec {
            data: Vec::new(),
            layout: Layout {
                title: Title::plain(format!("Error: {}", message)),
                ..Default::default()
            },
        }
    }

    /// True for the placeholder produced by [`ChartSpec::no_data`].
    pub fn is_no_data(&self) -> bool {
        self.data.is_empty() && self.layout.title.text == NO_DATA_TITLE
    }
}

/// Values along one axis of a trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Dates(Vec<NaiveDate>),
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Default for AxisValues {
    fn default() -> Self {
        AxisValues::Numbers(Vec::new())
    }
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Dates(v) => v.len(),
            AxisValues::Numbers(v) => v.len(),
            AxisValues::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Scatter,
    Box,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
    #[serde(rename = "markers")]
    Markers,
}

/// Which sample points a box trace draws next to its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxPoints {
    Outliers,
}

/// One renderable data series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisValues>,
    pub y: AxisValues,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxpoints: Option<BoxPoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointpos: Option<f64>,
    /// Per-point `[region, date]` pairs for tooltips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<(String, NaiveDate)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerOutline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerOutline {
    pub width: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<XAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    /// A title with text only; the renderer picks placement.
    pub fn plain(text: impl Into<String>) -> Self {
        Title {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixedrange: Option<bool>,
    pub showgrid: bool,
    pub gridcolor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickprefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub bgcolor: String,
    pub bordercolor: String,
    pub borderwidth: u32,
}

/// Free text placed on the chart in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
    pub font: Font,
}

impl Annotation {
    /// Arrow-less text in the middle of the plotting area.
    pub fn centered(text: impl Into<String>) -> Self {
        Annotation {
            text: text.into(),
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            x: 0.5,
            y: 0.5,
            showarrow: false,
            font: Font { size: 16 },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorway: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
}
