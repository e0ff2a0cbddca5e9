//! Scatter plot of one numeric column against another, one trace per type.

use avo_data::observation::{NumericColumn, Observation};
use avo_utils::labels::humanize;

use crate::group::{column_values, partition_by};
use crate::models::{AxisValues, ChartSpec, Layout, Marker, MarkerOutline, Trace, TraceMode};
use crate::style::{self, type_color, BACKGROUND};

/// Scatter chart of `x_column` against `y_column` for a non-empty subset.
///
/// Traces come out in alphabetical type order, the same order the box plot
/// uses. Each point carries its region and date for the tooltip.
pub fn scatter_chart(subset: &[&Observation], x_column: NumericColumn, y_column: NumericColumn) -> ChartSpec {
    let x_title = humanize(x_column.name());
    let y_title = humanize(y_column.name());
    let hovertemplate = format!(
        "<b>%{{fullData.name}}</b><br>{}: %{{x}}<br>{}: %{{y}}<br>Region: %{{customdata[0]}}<br>Date: %{{customdata[1]}}<extra></extra>",
        x_title, y_title
    );

    let data = partition_by(subset, |obs| obs.avocado_type)
        .into_iter()
        .map(|(avocado_type, rows)| Trace {
            x: Some(AxisValues::Numbers(column_values(&rows, x_column))),
            y: AxisValues::Numbers(column_values(&rows, y_column)),
            mode: Some(TraceMode::Markers),
            name: avocado_type.label().to_string(),
            hovertemplate: Some(hovertemplate.clone()),
            marker: Some(Marker {
                size: Some(8),
                color: Some(type_color(avocado_type).to_string()),
                opacity: Some(0.7),
                line: Some(MarkerOutline {
                    width: 1,
                    color: "white".to_string(),
                }),
            }),
            customdata: Some(rows.iter().map(|obs| (obs.region.clone(), obs.date)).collect()),
            ..Default::default()
        })
        .collect();

    ChartSpec {
        data,
        layout: Layout {
            title: style::centered_title(format!("{} vs {}", x_title, y_title)),
            xaxis: Some(style::grid_axis(x_title)),
            yaxis: Some(style::grid_axis(y_title)),
            plot_bgcolor: Some(BACKGROUND.to_string()),
            paper_bgcolor: Some(BACKGROUND.to_string()),
            hovermode: Some("closest".to_string()),
            legend: Some(style::side_legend()),
            ..Default::default()
        },
    }
}
