use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::dataset::Dataset;
use crate::date_range::DateRange;
use crate::error::InputError;
use crate::observation::{AvocadoType, Observation};

/// Region shown when the dashboard first opens.
pub const DEFAULT_REGION: &str = "Albany";

/// Avocado type shown when the dashboard first opens.
pub const DEFAULT_TYPE: AvocadoType = AvocadoType::Organic;

/// The region/type/date selection driving every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub region: String,
    pub avocado_type: AvocadoType,
    pub date_range: DateRange,
}

impl FilterParams {
    pub fn new(region: impl Into<String>, avocado_type: AvocadoType, date_range: DateRange) -> Self {
        FilterParams {
            region: region.into(),
            avocado_type,
            date_range,
        }
    }

    /// Initial control values: Albany (or the first region), organic (or the
    /// first type) and the full date span of the dataset.
    pub fn defaults(dataset: &Dataset) -> Self {
        let region = if dataset.has_region(DEFAULT_REGION) {
            DEFAULT_REGION.to_string()
        } else {
            dataset.regions().first().cloned().unwrap_or_default()
        };
        let avocado_type = if dataset.has_type(DEFAULT_TYPE) {
            DEFAULT_TYPE
        } else {
            dataset.types().first().copied().unwrap_or(DEFAULT_TYPE)
        };
        FilterParams {
            region,
            avocado_type,
            date_range: dataset.date_range(),
        }
    }

    fn matches(&self, observation: &Observation, policy: FilterPolicy) -> bool {
        let region_ok = policy == FilterPolicy::AnyRegion || observation.region == self.region;
        let type_ok = policy == FilterPolicy::AnyType || observation.avocado_type == self.avocado_type;
        region_ok && type_ok && self.date_range.contains(&observation.date)
    }
}

/// Which dimensions of [`FilterParams`] a selection honours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Region, type and date range.
    Full,
    /// Region and date range; both avocado types pass.
    AnyType,
    /// Type and date range; every region passes.
    AnyRegion,
}

/// Grouping key for the box-plot chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Type,
    Region,
    Year,
}

impl GroupBy {
    pub const ALL: [GroupBy; 3] = [GroupBy::Type, GroupBy::Region, GroupBy::Year];

    /// Identifier as sent by the shell.
    pub fn key(&self) -> &'static str {
        match self {
            GroupBy::Type => "type",
            GroupBy::Region => "region",
            GroupBy::Year => "year",
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Type => "Avocado Type",
            GroupBy::Region => "Region",
            GroupBy::Year => "Year",
        }
    }

    /// A box plot compares across its grouping dimension, so it must not
    /// be filtered on that dimension.
    pub fn filter_policy(&self) -> FilterPolicy {
        match self {
            GroupBy::Type => FilterPolicy::AnyType,
            GroupBy::Region => FilterPolicy::AnyRegion,
            GroupBy::Year => FilterPolicy::Full,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GroupBy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        GroupBy::ALL
            .into_iter()
            .find(|group_by| group_by.key() == s)
            .ok_or_else(|| InputError::UnknownGroupBy(s.to_string()))
    }
}

/// Rows matching region, type and date range, in dataset order.
pub fn select<'a>(dataset: &'a Dataset, params: &FilterParams) -> Vec<&'a Observation> {
    select_with(dataset, params, FilterPolicy::Full)
}

/// Rows matching `params` under the given policy, in dataset order.
///
/// An empty result is a normal outcome, not an error.
pub fn select_with<'a>(
    dataset: &'a Dataset,
    params: &FilterParams,
    policy: FilterPolicy,
) -> Vec<&'a Observation> {
    let subset: Vec<&Observation> = dataset
        .observations()
        .iter()
        .filter(|obs| params.matches(obs, policy))
        .collect();
    log::debug!(
        "filter: {:?} selection for {} / {} matched {} of {} observations",
        policy,
        params.region,
        params.avocado_type,
        subset.len(),
        dataset.len()
    );
    subset
}

/// Rows for a box plot grouped by `group_by`, which relaxes that dimension.
pub fn select_for_box_plot<'a>(
    dataset: &'a Dataset,
    params: &FilterParams,
    group_by: GroupBy,
) -> Vec<&'a Observation> {
    select_with(dataset, params, group_by.filter_policy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const CSV: &str = "\
Date,AveragePrice,Total Volume,Total Bags,Small Bags,Large Bags,XLarge Bags,type,year,region
2015-01-04,1.22,40873.28,9716.46,9186.93,529.53,0.0,conventional,2015,Albany
2015-01-04,1.79,1373.95,1162.65,1162.65,0.0,0.0,organic,2015,Albany
2015-01-04,1.09,185811.3,23563.05,21536.47,2026.58,0.0,conventional,2015,Denver
2015-01-04,1.51,5765.24,4009.32,4009.32,0.0,0.0,organic,2015,Denver
2016-01-03,1.01,54453.03,6297.92,6258.5,39.42,0.0,conventional,2016,Albany
2016-01-03,1.52,1632.97,1542.33,1542.33,0.0,0.0,organic,2016,Albany
2016-01-03,1.58,6008.83,3934.43,3934.43,0.0,0.0,organic,2016,Denver
2017-01-01,1.47,2034.58,1836.3,1836.3,0.0,0.0,organic,2017,Albany
";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params(dataset: &Dataset, region: &str, avocado_type: AvocadoType) -> FilterParams {
        let (start, end) = dataset.date_bounds();
        FilterParams::new(region, avocado_type, DateRange::new(start, end).unwrap())
    }

    #[test]
    fn select_applies_full_predicate_in_order() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let subset = select(&dataset, &params(&dataset, "Albany", AvocadoType::Organic));

        assert_eq!(subset.len(), 3);
        assert!(subset
            .iter()
            .all(|o| o.region == "Albany" && o.avocado_type == AvocadoType::Organic));
        let dates: Vec<NaiveDate> = subset.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![date(2015, 1, 4), date(2016, 1, 3), date(2017, 1, 1)]);
    }

    #[test]
    fn select_honours_inclusive_date_range() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let range = DateRange::new(date(2015, 1, 4), date(2016, 1, 3)).unwrap();
        let subset = select(&dataset, &FilterParams::new("Albany", AvocadoType::Organic, range));
        assert_eq!(subset.len(), 2);
        assert_eq!(subset[1].average_price, 1.52);
    }

    #[test]
    fn select_unknown_region_is_empty() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let subset = select(&dataset, &params(&dataset, "Mars", AvocadoType::Organic));
        assert!(subset.is_empty());
    }

    #[test]
    fn select_outside_coverage_is_empty() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let range = DateRange::new(date(2019, 1, 1), date(2019, 12, 31)).unwrap();
        let subset = select(&dataset, &FilterParams::new("Albany", AvocadoType::Organic, range));
        assert!(subset.is_empty());
    }

    #[test]
    fn box_plot_by_type_keeps_both_types() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let p = params(&dataset, "Denver", AvocadoType::Organic);
        let subset = select_for_box_plot(&dataset, &p, GroupBy::Type);
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|o| o.region == "Denver"));
        assert!(subset.iter().any(|o| o.avocado_type == AvocadoType::Conventional));
    }

    #[test]
    fn box_plot_by_region_keeps_all_regions() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let p = params(&dataset, "Albany", AvocadoType::Organic);
        let subset = select_for_box_plot(&dataset, &p, GroupBy::Region);
        assert_eq!(subset.len(), 5);
        assert!(subset.iter().all(|o| o.avocado_type == AvocadoType::Organic));
        assert!(subset.iter().any(|o| o.region == "Denver"));
    }

    #[test]
    fn box_plot_by_year_uses_full_predicate() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let p = params(&dataset, "Albany", AvocadoType::Organic);
        assert_eq!(
            select_for_box_plot(&dataset, &p, GroupBy::Year),
            select(&dataset, &p)
        );
    }

    #[test]
    fn defaults_prefer_albany_organic_full_range() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let defaults = FilterParams::defaults(&dataset);
        assert_eq!(defaults.region, "Albany");
        assert_eq!(defaults.avocado_type, AvocadoType::Organic);
        assert_eq!(defaults.date_range.start(), date(2015, 1, 4));
        assert_eq!(defaults.date_range.end(), date(2017, 1, 1));
    }

    #[test]
    fn defaults_fall_back_to_first_values() {
        let csv = "\
Date,AveragePrice,Total Volume,Total Bags,Small Bags,Large Bags,XLarge Bags,type,year,region
2015-01-04,1.09,185811.3,23563.05,21536.47,2026.58,0.0,conventional,2015,Denver
2015-01-04,1.10,1000.0,100.0,100.0,0.0,0.0,conventional,2015,Boise
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let defaults = FilterParams::defaults(&dataset);
        assert_eq!(defaults.region, "Boise");
        assert_eq!(defaults.avocado_type, AvocadoType::Conventional);
    }

    #[test]
    fn group_by_parses_keys() {
        assert_eq!("region".parse::<GroupBy>(), Ok(GroupBy::Region));
        assert_eq!(
            "month".parse::<GroupBy>(),
            Err(InputError::UnknownGroupBy("month".to_string()))
        );
        assert_eq!(GroupBy::Type.filter_policy(), FilterPolicy::AnyType);
    }
}
