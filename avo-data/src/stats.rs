use chrono::NaiveDate;
use serde::Serialize;

use crate::observation::Observation;

/// Headline numbers for a filtered subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub avg_price: f64,
    pub max_price: f64,
    pub min_price: f64,
    pub total_volume: f64,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl SummaryStats {
    /// Compute the summary, or `None` when the subset is empty.
    pub fn from_subset(subset: &[&Observation]) -> Option<SummaryStats> {
        let first = subset.first()?;

        let mut stats = SummaryStats {
            count: subset.len(),
            avg_price: 0.0,
            max_price: f64::NEG_INFINITY,
            min_price: f64::INFINITY,
            total_volume: 0.0,
            date_start: first.date,
            date_end: first.date,
        };
        let mut price_sum = 0.0;
        for obs in subset {
            price_sum += obs.average_price;
            stats.max_price = stats.max_price.max(obs.average_price);
            stats.min_price = stats.min_price.min(obs.average_price);
            stats.total_volume += obs.total_volume;
            stats.date_start = stats.date_start.min(obs.date);
            stats.date_end = stats.date_end.max(obs.date);
        }
        stats.avg_price = price_sum / subset.len() as f64;
        Some(stats)
    }
}
