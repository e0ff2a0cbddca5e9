/// Error types for the avocado dataset
use chrono::NaiveDate;
use thiserror::Error;

/// Failures while loading the dataset. Both are fatal at startup.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The source file is missing or cannot be opened
    #[error("Dataset unavailable at {path}: {source}")]
    DataUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The source file was read but its content is unusable
    #[error("Malformed dataset: {0}")]
    DataMalformed(String),
}

/// A filter or chart parameter that does not name anything in the dataset model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown avocado type '{0}'")]
    UnknownType(String),

    #[error("unknown numeric column '{0}'")]
    UnknownColumn(String),

    #[error("unknown group-by '{0}'")]
    UnknownGroupBy(String),

    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}
