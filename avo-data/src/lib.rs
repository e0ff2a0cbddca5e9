//! Avocado sales dataset: loading, filtering and summary statistics.
//!
//! The [`dataset::Dataset`] is built once from the source CSV and never
//! mutated afterwards. Everything downstream borrows it: the filter engine
//! hands out ordered subsets of `&Observation`, and chart builders in
//! `avo-chart` turn those subsets into chart specifications.

pub mod dataset;
pub mod date_range;
pub mod error;
pub mod filter;
mod loader;
pub mod observation;
pub mod stats;
