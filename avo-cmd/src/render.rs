//! `avo render` and `avo dashboard`: chart specifications as JSON.

use avo_chart::render::{render, render_dashboard, ChartKind, RenderRequest};
use avo_data::dataset::Dataset;

use crate::{ChartArgs, FilterArgs};

/// The dashboard's first-load request for `chart` with the given overrides.
fn build_request(dataset: &Dataset, chart: ChartKind, filters: &FilterArgs, chart_args: &ChartArgs) -> RenderRequest {
    chart_args.apply(filters.apply(RenderRequest::defaults(dataset, chart)))
}

pub fn render_json(
    dataset: &Dataset,
    chart: ChartKind,
    filters: &FilterArgs,
    chart_args: &ChartArgs,
    pretty: bool,
) -> anyhow::Result<String> {
    let request = build_request(dataset, chart, filters, chart_args);
    log::info!(
        "Rendering {} chart for {} / {} from {} to {}",
        chart,
        request.region,
        request.avocado_type,
        request.start_date,
        request.end_date
    );
    let spec = render(dataset, &request);
    if spec.is_no_data() {
        log::info!("No observations match the selected filters");
    }
    crate::to_json(&spec, pretty)
}

pub fn dashboard_json(
    dataset: &Dataset,
    filters: &FilterArgs,
    chart_args: &ChartArgs,
    pretty: bool,
) -> anyhow::Result<String> {
    let request = build_request(dataset, ChartKind::Price, filters, chart_args);
    log::info!("Rendering dashboard for {} / {}", request.region, request.avocado_type);
    crate::to_json(&render_dashboard(dataset, &request), pretty)
}
