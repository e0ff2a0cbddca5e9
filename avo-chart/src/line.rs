//! Date-keyed line charts: average price and volume sold.

use avo_data::observation::Observation;

use crate::models::{AxisValues, ChartSpec, Layout, LineStyle, Marker, Trace, TraceMode};
use crate::style::{self, BACKGROUND, RED, TEAL};

/// What distinguishes one time-series card from the other.
struct SeriesDef {
    value: fn(&Observation) -> f64,
    trace_name: &'static str,
    hovertemplate: &'static str,
    title: &'static str,
    y_title: &'static str,
    tick_prefix: Option<&'static str>,
    color: &'static str,
}

fn average_price(obs: &Observation) -> f64 {
    obs.average_price
}

fn total_volume(obs: &Observation) -> f64 {
    obs.total_volume
}

const PRICE: SeriesDef = SeriesDef {
    value: average_price,
    trace_name: "Average Price",
    hovertemplate: "Date: %{x}<br>Price: $%{y:.2f}<extra></extra>",
    title: "Average Price of Avocados",
    y_title: "Price (USD)",
    tick_prefix: Some("$"),
    color: TEAL,
};

const VOLUME: SeriesDef = SeriesDef {
    value: total_volume,
    trace_name: "Volume Sold",
    hovertemplate: "Date: %{x}<br>Volume: %{y:,.0f}<extra></extra>",
    title: "Avocados Sold (Volume)",
    y_title: "Volume",
    tick_prefix: None,
    color: RED,
};

/// Average price over time for a non-empty subset.
pub fn price_chart(subset: &[&Observation]) -> ChartSpec {
    date_series_chart(subset, &PRICE)
}

/// Total volume sold over time for a non-empty subset.
pub fn volume_chart(subset: &[&Observation]) -> ChartSpec {
    date_series_chart(subset, &VOLUME)
}

fn date_series_chart(subset: &[&Observation], def: &SeriesDef) -> ChartSpec {
    let trace = Trace {
        x: Some(AxisValues::Dates(subset.iter().map(|obs| obs.date).collect())),
        y: AxisValues::Numbers(subset.iter().map(|obs| (def.value)(obs)).collect()),
        mode: Some(TraceMode::LinesAndMarkers),
        name: def.trace_name.to_string(),
        hovertemplate: Some(def.hovertemplate.to_string()),
        line: Some(LineStyle { width: 3 }),
        marker: Some(Marker {
            size: Some(4),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut yaxis = style::fixed_axis(def.y_title);
    yaxis.tickprefix = def.tick_prefix.map(str::to_string);

    ChartSpec {
        data: vec![trace],
        layout: Layout {
            title: style::left_title(def.title),
            xaxis: Some(style::fixed_axis("Date")),
            yaxis: Some(yaxis),
            colorway: Some(vec![def.color.to_string()]),
            plot_bgcolor: Some(BACKGROUND.to_string()),
            paper_bgcolor: Some(BACKGROUND.to_string()),
            ..Default::default()
        },
    }
}
