//! The immutable, date-ordered avocado table and the metadata derived from it.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::date_range::DateRange;
use crate::error::DatasetError;
use crate::observation::{AvocadoType, NumericColumn, Observation};

/// The loaded avocado dataset.
///
/// Observations are sorted ascending by date; rows sharing a date keep
/// their file order. Region, type and date metadata is computed once at
/// construction and never changes.
#[derive(Debug, Clone)]
pub struct Dataset {
    observations: Vec<Observation>,
    regions: Vec<String>,
    types: Vec<AvocadoType>,
    date_bounds: (NaiveDate, NaiveDate),
}

impl Dataset {
    /// Validate, sort and index a set of observations.
    ///
    /// Fails with [`DatasetError::DataMalformed`] when a row breaks an
    /// invariant or when there are no rows at all.
    pub fn from_observations(mut observations: Vec<Observation>) -> Result<Self, DatasetError> {
        for (idx, obs) in observations.iter().enumerate() {
            obs.validate()
                .map_err(|msg| DatasetError::DataMalformed(format!("row {}: {}", idx + 1, msg)))?;
        }

        observations.sort_by_key(|obs| obs.date);

        let (first, last) = match (observations.first(), observations.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => {
                return Err(DatasetError::DataMalformed(
                    "dataset contains no observations".to_string(),
                ))
            }
        };

        let regions: Vec<String> = observations
            .iter()
            .map(|obs| obs.region.as_str())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let types: Vec<AvocadoType> = observations
            .iter()
            .map(|obs| obs.avocado_type)
            .collect::<BTreeSet<AvocadoType>>()
            .into_iter()
            .collect();

        Ok(Dataset {
            observations,
            regions,
            types,
            date_bounds: (first, last),
        })
    }

    /// All observations in date order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false for a constructed dataset; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Sorted distinct regions.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Sorted distinct avocado types.
    pub fn types(&self) -> &[AvocadoType] {
        &self.types
    }

    /// Names of the plottable numeric columns, in source order.
    pub fn numeric_columns(&self) -> Vec<&'static str> {
        NumericColumn::ALL.iter().map(|column| column.name()).collect()
    }

    /// Earliest and latest observation dates.
    pub fn date_bounds(&self) -> (NaiveDate, NaiveDate) {
        self.date_bounds
    }

    /// The full date span as a filter range.
    pub fn date_range(&self) -> DateRange {
        DateRange::from_ordered(self.date_bounds.0, self.date_bounds.1)
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.regions.binary_search_by(|r| r.as_str().cmp(region)).is_ok()
    }

    pub fn has_type(&self, avocado_type: AvocadoType) -> bool {
        self.types.contains(&avocado_type)
    }

    /// Values for populating the shell's dropdowns and date pickers.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            regions: self.regions.clone(),
            types: self.types.iter().map(|t| t.as_str().to_string()).collect(),
            numeric_columns: self.numeric_columns().into_iter().map(String::from).collect(),
            date_bounds: self.date_bounds,
        }
    }
}

/// Control population data handed to the shell once at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub types: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub date_bounds: (NaiveDate, NaiveDate),
}

/// Free-function form of [`Dataset::filter_options`].
pub fn get_filter_options(dataset: &Dataset) -> FilterOptions {
    dataset.filter_options()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(region: &str, avocado_type: AvocadoType, date: (i32, u32, u32), price: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            average_price: price,
            total_volume: 1000.0,
            total_bags: 100.0,
            small_bags: 80.0,
            large_bags: 20.0,
            xlarge_bags: 0.0,
            avocado_type,
            year: date.0,
            region: region.to_string(),
        }
    }

    #[test]
    fn dataset_sorts_by_date_and_keeps_ties_in_order() {
        let dataset = Dataset::from_observations(vec![
            obs("Denver", AvocadoType::Organic, (2016, 1, 3), 1.5),
            obs("Albany", AvocadoType::Conventional, (2015, 1, 4), 1.0),
            obs("Albany", AvocadoType::Organic, (2016, 1, 3), 1.7),
        ])
        .unwrap();

        let dates: Vec<NaiveDate> = dataset.observations().iter().map(|o| o.date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dataset.observations()[1].region, "Denver");
        assert_eq!(dataset.observations()[2].region, "Albany");
    }

    #[test]
    fn dataset_computes_metadata() {
        let dataset = Dataset::from_observations(vec![
            obs("Denver", AvocadoType::Organic, (2017, 6, 4), 1.5),
            obs("Albany", AvocadoType::Organic, (2015, 1, 4), 1.0),
            obs("Albany", AvocadoType::Organic, (2018, 3, 25), 1.2),
        ])
        .unwrap();

        assert_eq!(dataset.regions(), ["Albany".to_string(), "Denver".to_string()]);
        assert_eq!(dataset.types(), [AvocadoType::Organic]);
        assert_eq!(
            dataset.date_bounds(),
            (
                NaiveDate::from_ymd_opt(2015, 1, 4).unwrap(),
                NaiveDate::from_ymd_opt(2018, 3, 25).unwrap()
            )
        );
        assert!(dataset.has_region("Denver"));
        assert!(!dataset.has_region("Mars"));
        assert!(!dataset.has_type(AvocadoType::Conventional));
    }

    #[test]
    fn dataset_rejects_empty_input() {
        let err = Dataset::from_observations(Vec::new()).unwrap_err();
        assert!(matches!(err, DatasetError::DataMalformed(_)));
    }

    #[test]
    fn dataset_rejects_inconsistent_year_with_row_number() {
        let mut bad = obs("Albany", AvocadoType::Organic, (2016, 1, 3), 1.0);
        bad.year = 2015;
        let err = Dataset::from_observations(vec![
            obs("Albany", AvocadoType::Organic, (2016, 1, 10), 1.0),
            bad,
        ])
        .unwrap_err();
        assert!(err.to_string().contains("row 2"), "{}", err);
    }

    #[test]
    fn filter_options_match_dataset() {
        let dataset = Dataset::from_observations(vec![
            obs("Denver", AvocadoType::Organic, (2017, 6, 4), 1.5),
            obs("Albany", AvocadoType::Conventional, (2015, 1, 4), 1.0),
        ])
        .unwrap();
        let options = get_filter_options(&dataset);

        assert_eq!(options.regions, dataset.regions());
        assert_eq!(options.types, vec!["conventional", "organic"]);
        assert_eq!(
            options.numeric_columns,
            vec![
                "AveragePrice",
                "Total Volume",
                "Total Bags",
                "Small Bags",
                "Large Bags",
                "XLarge Bags",
                "year"
            ]
        );
        assert_eq!(options.date_bounds, dataset.date_bounds());

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["date_bounds"][0], "2015-01-04");
        assert_eq!(json["date_bounds"][1], "2017-06-04");
    }
}
