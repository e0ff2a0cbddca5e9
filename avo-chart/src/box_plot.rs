//! Distribution of one numeric column, split by type, region or year.

use avo_data::filter::GroupBy;
use avo_data::observation::{NumericColumn, Observation};
use avo_utils::labels::humanize;

use crate::group::{column_values, partition_by};
use crate::models::{AxisValues, BoxPoints, ChartSpec, Layout, Marker, Trace, TraceKind};
use crate::style::{self, type_color, BACKGROUND};

const JITTER: f64 = 0.3;
const POINT_POS: f64 = -1.8;

/// Box plot of `column` over a non-empty subset, one box per group.
///
/// The subset should come from `select_for_box_plot` so the grouping
/// dimension is not already filtered down to a single value.
pub fn box_plot_chart(subset: &[&Observation], column: NumericColumn, group_by: GroupBy) -> ChartSpec {
    let by_type = partition_by(subset, |obs| obs.avocado_type);
    let regions_by_type = group_by == GroupBy::Region && by_type.len() > 1;

    let data: Vec<Trace> = match group_by {
        GroupBy::Type => by_type
            .into_iter()
            .map(|(avocado_type, rows)| Trace {
                marker: Some(colored(type_color(avocado_type))),
                ..jittered_box(avocado_type.label().to_string(), &rows, column)
            })
            .collect(),
        GroupBy::Region if regions_by_type => by_type
            .into_iter()
            .map(|(avocado_type, rows)| Trace {
                x: Some(AxisValues::Labels(rows.iter().map(|obs| obs.region.clone()).collect())),
                y: AxisValues::Numbers(column_values(&rows, column)),
                kind: TraceKind::Box,
                name: avocado_type.label().to_string(),
                marker: Some(colored(type_color(avocado_type))),
                boxpoints: Some(BoxPoints::Outliers),
                ..Default::default()
            })
            .collect(),
        GroupBy::Region => partition_by(subset, |obs| obs.region.clone())
            .into_iter()
            .map(|(region, rows)| jittered_box(region, &rows, column))
            .collect(),
        GroupBy::Year => partition_by(subset, |obs| obs.year)
            .into_iter()
            .map(|(year, rows)| jittered_box(year.to_string(), &rows, column))
            .collect(),
    };

    let x_title = if regions_by_type {
        "Region".to_string()
    } else {
        humanize(group_by.key())
    };
    let showlegend = regions_by_type || data.len() > 1;
    let column_title = humanize(column.name());

    ChartSpec {
        data,
        layout: Layout {
            title: style::centered_title(format!(
                "{} Distribution by {}",
                column_title,
                humanize(group_by.key())
            )),
            xaxis: Some(style::grid_axis(x_title)),
            yaxis: Some(style::grid_axis(column_title)),
            plot_bgcolor: Some(BACKGROUND.to_string()),
            paper_bgcolor: Some(BACKGROUND.to_string()),
            showlegend: Some(showlegend),
            legend: Some(style::side_legend()),
            ..Default::default()
        },
    }
}

fn jittered_box(name: String, rows: &[&Observation], column: NumericColumn) -> Trace {
    Trace {
        y: AxisValues::Numbers(column_values(rows, column)),
        kind: TraceKind::Box,
        name,
        boxpoints: Some(BoxPoints::Outliers),
        jitter: Some(JITTER),
        pointpos: Some(POINT_POS),
        ..Default::default()
    }
}

fn colored(color: &str) -> Marker {
    Marker {
        color: Some(color.to_string()),
        ..Default::default()
    }
}
