//! `avo summary`: headline numbers for a filter selection.

use anyhow::Context;
use avo_chart::render::{ChartKind, RenderRequest};
use avo_data::dataset::Dataset;
use avo_data::filter::select;
use avo_data::stats::SummaryStats;
use avo_utils::dates::format_date;
use avo_utils::numbers::format_number;

use crate::FilterArgs;

pub fn summary_report(dataset: &Dataset, filters: &FilterArgs) -> anyhow::Result<String> {
    let request = filters.apply(RenderRequest::defaults(dataset, ChartKind::Price));
    let params = request.filter_params().context("Invalid filter")?;
    let subset = select(dataset, &params);

    let report = match SummaryStats::from_subset(&subset) {
        Some(stats) => {
            log::info!("Summarized {} observations", stats.count);
            format!(
                "{} ({})\n\
                 Dates:         {} to {}\n\
                 Observations:  {}\n\
                 Average price: ${:.2} (min ${:.2}, max ${:.2})\n\
                 Total volume:  {}",
                params.region,
                params.avocado_type,
                format_date(&stats.date_start),
                format_date(&stats.date_end),
                stats.count,
                stats.avg_price,
                stats.min_price,
                stats.max_price,
                format_number(stats.total_volume)
            )
        }
        None => format!(
            "{} ({}): no observations between {} and {}",
            params.region,
            params.avocado_type,
            format_date(&params.date_range.start()),
            format_date(&params.date_range.end())
        ),
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = include_str!("../../fixtures/avocado_sample.csv");

    #[test]
    fn summary_for_default_selection() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let report = summary_report(&dataset, &FilterArgs::default()).unwrap();

        assert!(report.starts_with("Albany (organic)"), "{}", report);
        assert!(report.contains("2015-01-04 to 2017-01-01"), "{}", report);
        assert!(report.contains("Observations:  5"), "{}", report);
        assert!(report.contains("$1.61 (min $1.55, max $1.67)"), "{}", report);
        assert!(report.contains("Total volume:  7.9K"), "{}", report);
    }

    #[test]
    fn summary_for_empty_selection() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let filters = FilterArgs {
            region: Some("Mars".to_string()),
            ..Default::default()
        };
        let report = summary_report(&dataset, &filters).unwrap();
        assert!(report.contains("no observations"), "{}", report);
    }

    #[test]
    fn summary_rejects_bad_type() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let filters = FilterArgs {
            avocado_type: Some("hass".to_string()),
            ..Default::default()
        };
        let err = summary_report(&dataset, &filters).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown avocado type 'hass'"), "{:#}", err);
    }
}
