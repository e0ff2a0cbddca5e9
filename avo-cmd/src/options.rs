//! `avo options`: the values each filter control can take.

use avo_data::dataset::{get_filter_options, Dataset};

pub fn options_json(dataset: &Dataset, pretty: bool) -> anyhow::Result<String> {
    let options = get_filter_options(dataset);
    log::info!(
        "{} regions, {} types, {} numeric columns",
        options.regions.len(),
        options.types.len(),
        options.numeric_columns.len()
    );
    crate::to_json(&options, pretty)
}
