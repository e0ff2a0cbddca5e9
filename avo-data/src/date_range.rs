use chrono::NaiveDate;
use serde::Serialize;

use crate::error::InputError;

/// An inclusive span of calendar days, from the start date
/// through the end date. Construction guarantees `start <= end`.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InputError> {
        if start > end {
            return Err(InputError::InvertedDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// For bounds already known to be ordered, such as a dataset's min/max.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        DateRange { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `date` lies within the range, both ends included.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }
}
