use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::InputError;

/// Kind of avocado an observation was recorded for.
///
/// Variant order is alphabetical by source name, so the derived `Ord`
/// matches a string sort of the raw values.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvocadoType {
    Conventional,
    Organic,
}

impl AvocadoType {
    pub const ALL: [AvocadoType; 2] = [AvocadoType::Conventional, AvocadoType::Organic];

    /// The value as written in the source file.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvocadoType::Conventional => "conventional",
            AvocadoType::Organic => "organic",
        }
    }

    /// Display label used for trace names and dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            AvocadoType::Conventional => "Conventional",
            AvocadoType::Organic => "Organic",
        }
    }
}

impl fmt::Display for AvocadoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvocadoType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "conventional" => Ok(AvocadoType::Conventional),
            "organic" => Ok(AvocadoType::Organic),
            other => Err(InputError::UnknownType(other.to_string())),
        }
    }
}

/// The numeric columns of the source table that can be plotted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NumericColumn {
    AveragePrice,
    TotalVolume,
    TotalBags,
    SmallBags,
    LargeBags,
    XLargeBags,
    Year,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 7] = [
        NumericColumn::AveragePrice,
        NumericColumn::TotalVolume,
        NumericColumn::TotalBags,
        NumericColumn::SmallBags,
        NumericColumn::LargeBags,
        NumericColumn::XLargeBags,
        NumericColumn::Year,
    ];

    /// Column header in the source CSV.
    pub fn name(&self) -> &'static str {
        match self {
            NumericColumn::AveragePrice => "AveragePrice",
            NumericColumn::TotalVolume => "Total Volume",
            NumericColumn::TotalBags => "Total Bags",
            NumericColumn::SmallBags => "Small Bags",
            NumericColumn::LargeBags => "Large Bags",
            NumericColumn::XLargeBags => "XLarge Bags",
            NumericColumn::Year => "year",
        }
    }

    /// Read this column from an observation.
    pub fn value(&self, observation: &Observation) -> f64 {
        match self {
            NumericColumn::AveragePrice => observation.average_price,
            NumericColumn::TotalVolume => observation.total_volume,
            NumericColumn::TotalBags => observation.total_bags,
            NumericColumn::SmallBags => observation.small_bags,
            NumericColumn::LargeBags => observation.large_bags,
            NumericColumn::XLargeBags => observation.xlarge_bags,
            NumericColumn::Year => f64::from(observation.year),
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericColumn {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NumericColumn::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| InputError::UnknownColumn(s.to_string()))
    }
}

/// One weekly sales observation for a region and avocado type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub average_price: f64,
    pub total_volume: f64,
    pub total_bags: f64,
    pub small_bags: f64,
    pub large_bags: f64,
    pub xlarge_bags: f64,
    pub avocado_type: AvocadoType,
    pub year: i32,
    pub region: String,
}

impl Observation {
    /// Check the per-row invariants of the dataset.
    pub fn validate(&self) -> Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("empty region".to_string());
        }
        if self.year != self.date.year() {
            return Err(format!(
                "year {} does not match date {}",
                self.year, self.date
            ));
        }
        let counts = [
            ("Total Volume", self.total_volume),
            ("Total Bags", self.total_bags),
            ("Small Bags", self.small_bags),
            ("Large Bags", self.large_bags),
            ("XLarge Bags", self.xlarge_bags),
        ];
        for (name, value) in counts {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }
        if !self.average_price.is_finite() {
            return Err(format!("AveragePrice is not finite: {}", self.average_price));
        }
        Ok(())
    }
}
