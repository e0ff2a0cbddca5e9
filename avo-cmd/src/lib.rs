//! Command implementations for the avo CLI.
//!
//! Every subcommand loads the dataset once, runs the analytics pipeline and
//! prints its result to stdout as JSON (or a short text report for
//! `summary`).

use std::path::Path;

use anyhow::Context;
use avo_chart::render::RenderRequest;
use avo_data::dataset::Dataset;
use clap::{Args, Subcommand};
use serde::Serialize;

pub mod options;
pub mod render;
pub mod summary;

/// Filter controls. Omitted values take the dashboard's initial selection.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Region name, e.g. "Albany"
    #[arg(short, long)]
    pub region: Option<String>,

    /// Avocado type: conventional or organic
    #[arg(short = 't', long = "type")]
    pub avocado_type: Option<String>,

    /// First day included, YYYY-MM-DD
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day included, YYYY-MM-DD
    #[arg(short, long)]
    pub end: Option<String>,
}

impl FilterArgs {
    /// Overlay the given values onto `request`.
    pub fn apply(&self, mut request: RenderRequest) -> RenderRequest {
        if let Some(region) = &self.region {
            request.region = region.clone();
        }
        if let Some(avocado_type) = &self.avocado_type {
            request.avocado_type = avocado_type.clone();
        }
        if let Some(start) = &self.start {
            request.start_date = start.clone();
        }
        if let Some(end) = &self.end {
            request.end_date = end.clone();
        }
        request
    }
}

/// Axis and grouping controls of the scatter and box-plot charts.
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Scatter x-axis column, e.g. "AveragePrice"
    #[arg(long)]
    pub x_column: Option<String>,

    /// Scatter y-axis column, e.g. "Total Volume"
    #[arg(long)]
    pub y_column: Option<String>,

    /// Box-plot column
    #[arg(long)]
    pub column: Option<String>,

    /// Box-plot grouping: type, region or year
    #[arg(long)]
    pub group_by: Option<String>,
}

impl ChartArgs {
    pub fn apply(&self, mut request: RenderRequest) -> RenderRequest {
        if self.x_column.is_some() {
            request.x_column = self.x_column.clone();
        }
        if self.y_column.is_some() {
            request.y_column = self.y_column.clone();
        }
        if self.column.is_some() {
            request.column = self.column.clone();
        }
        if self.group_by.is_some() {
            request.group_by = self.group_by.clone();
        }
        request
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the values the filter controls can take
    Options {
        #[arg(long)]
        pretty: bool,
    },

    /// Print the chart specification for one chart
    Render {
        /// Chart to build: price, volume, scatter or box
        #[arg(short, long)]
        chart: avo_chart::render::ChartKind,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        chart_args: ChartArgs,

        #[arg(long)]
        pretty: bool,
    },

    /// Print every dashboard chart for one filter selection
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        chart_args: ChartArgs,

        #[arg(long)]
        pretty: bool,
    },

    /// Print headline statistics for one filter selection
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

pub fn run(data: &Path, command: Command) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let output = match command {
        Command::Options { pretty } => options::options_json(&dataset, pretty)?,
        Command::Render {
            chart,
            filters,
            chart_args,
            pretty,
        } => render::render_json(&dataset, chart, &filters, &chart_args, pretty)?,
        Command::Dashboard {
            filters,
            chart_args,
            pretty,
        } => render::dashboard_json(&dataset, &filters, &chart_args, pretty)?,
        Command::Summary { filters } => summary::summary_report(&dataset, &filters)?,
    };
    println!("{}", output);
    Ok(())
}

/// Load the dataset at `path`; failure is fatal for every subcommand.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    log::info!("Loading avocado dataset from {}", path.display());
    Dataset::load(path).with_context(|| format!("Failed to load dataset from {}", path.display()))
}

pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
