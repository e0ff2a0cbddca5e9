//! Shared utility functions for avocado analytics crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used by the source CSV and every chart payload: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

}

/// Human-readable labels for column identifiers
pub mod labels {
    /// Turn a column identifier into a display label.
    ///
    /// Underscores become spaces and the first character of every word is
    /// upper-cased. The rest of each word is kept as written, so camel-cased
    /// source names such as `AveragePrice` survive intact.
    ///
    /// ```
    /// use avo_utils::labels::humanize;
    ///
    /// assert_eq!(humanize("Total Volume"), "Total Volume");
    /// assert_eq!(humanize("year"), "Year");
    /// assert_eq!(humanize("group_by"), "Group By");
    /// ```
    pub fn humanize(identifier: &str) -> String {
        title_case(&identifier.replace('_', " "))
    }

    /// Upper-case the first character of each space-separated word.
    pub fn title_case(s: &str) -> String {
        s.split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

}

/// Compact number formatting for summaries
pub mod numbers {
    /// Format large numbers with a K/M suffix.
    /// e.g., 1_260_000 -> "1.3M", 45_600 -> "45.6K", 812 -> "812"
    pub fn format_number(num: f64) -> String {
        if num >= 1_000_000.0 {
            format!("{:.1}M", num / 1_000_000.0)
        } else if num >= 1_000.0 {
            format!("{:.1}K", num / 1_000.0)
        } else {
            format!("{:.0}", num)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_number_suffixes() {
            assert_eq!(format_number(1_260_000.0), "1.3M");
            assert_eq!(format_number(1_000_000.0), "1.0M");
            assert_eq!(format_number(45_600.0), "45.6K");
            assert_eq!(format_number(999.4), "999");
            assert_eq!(format_number(0.0), "0");
        }
    }
}
