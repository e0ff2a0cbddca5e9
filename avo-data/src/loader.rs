//! CSV loading for the avocado dataset.
//!
//! The source table is the public weekly avocado sales export. Columns are
//! matched by header name, so the unnamed index column and the PLU columns
//! (`4046`, `4225`, `4770`) are simply ignored.
//!
//! # CSV Format
//!
//! ```text
//! ,Date,AveragePrice,Total Volume,4046,4225,4770,Total Bags,Small Bags,Large Bags,XLarge Bags,type,year,region
//! 0,2015-12-27,1.33,64236.62,1036.74,54454.85,48.16,8696.87,8603.62,93.25,0.0,conventional,2015,Albany
//! ```

use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::observation::{AvocadoType, Observation};

/// Headers that must be present in the source file.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Date",
    "AveragePrice",
    "Total Volume",
    "Total Bags",
    "Small Bags",
    "Large Bags",
    "XLarge Bags",
    "type",
    "year",
    "region",
];

/// One row as it appears in the CSV, before date and type parsing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "AveragePrice")]
    average_price: f64,
    #[serde(rename = "Total Volume")]
    total_volume: f64,
    #[serde(rename = "Total Bags")]
    total_bags: f64,
    #[serde(rename = "Small Bags")]
    small_bags: f64,
    #[serde(rename = "Large Bags")]
    large_bags: f64,
    #[serde(rename = "XLarge Bags")]
    xlarge_bags: f64,
    #[serde(rename = "type")]
    avocado_type: String,
    year: i32,
    region: String,
}

impl TryFrom<RawRecord> for Observation {
    type Error = String;

    fn try_from(value: RawRecord) -> Result<Self, Self::Error> {
        let date = avo_utils::dates::parse_date(&value.date)
            .map_err(|e| format!("unparseable date '{}': {}", value.date, e))?;
        let avocado_type = value
            .avocado_type
            .parse::<AvocadoType>()
            .map_err(|e| e.to_string())?;
        Ok(Observation {
            date,
            average_price: value.average_price,
            total_volume: value.total_volume,
            total_bags: value.total_bags,
            small_bags: value.small_bags,
            large_bags: value.large_bags,
            xlarge_bags: value.xlarge_bags,
            avocado_type,
            year: value.year,
            region: value.region,
        })
    }
}

impl Dataset {
    /// Load the dataset from a CSV file. Paths ending in `.gz` are gunzipped.
    ///
    /// A file that cannot be opened yields [`DatasetError::DataUnavailable`];
    /// any problem with its content yields [`DatasetError::DataMalformed`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::DataUnavailable {
            path: path.display().to_string(),
            source,
        })?;

        let is_gzip = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);

        log::info!("loader: reading {} (gzip: {})", path.display(), is_gzip);
        if is_gzip {
            Dataset::from_reader(GzDecoder::new(file))
        } else {
            Dataset::from_reader(file)
        }
    }

    /// Load the dataset from CSV text, typically an embedded fixture.
    pub fn from_csv_str(csv_data: &str) -> Result<Dataset, DatasetError> {
        Dataset::from_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any CSV byte stream with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| DatasetError::DataMalformed(format!("reading CSV headers: {}", e)))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::DataMalformed(format!(
                    "missing required column '{}'",
                    column
                )));
            }
        }

        let mut observations = Vec::new();
        for (idx, result) in rdr.deserialize::<RawRecord>().enumerate() {
            let row = idx + 1;
            let raw = result
                .map_err(|e| DatasetError::DataMalformed(format!("row {}: {}", row, e)))?;
            let observation = Observation::try_from(raw)
                .map_err(|msg| DatasetError::DataMalformed(format!("row {}: {}", row, msg)))?;
            observations.push(observation);
        }

        let dataset = Dataset::from_observations(observations)?;
        let (first, last) = dataset.date_bounds();
        log::info!(
            "loader: Loaded {} observations across {} regions ({} to {})",
            dataset.len(),
            dataset.regions().len(),
            first,
            last
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "\
,Date,AveragePrice,Total Volume,4046,4225,4770,Total Bags,Small Bags,Large Bags,XLarge Bags,type,year,region
0,2015-12-27,1.33,64236.62,1036.74,54454.85,48.16,8696.87,8603.62,93.25,0.0,conventional,2015,Albany
1,2015-12-20,1.35,54876.98,674.28,44638.81,58.33,9505.56,9408.07,97.49,0.0,conventional,2015,Albany
0,2015-12-27,1.83,1373.95,57.42,153.88,0.0,1162.65,1162.65,0.0,0.0,organic,2015,Albany
";

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("avo-loader-{}-{}", std::process::id(), name))
    }

    #[test]
    fn load_from_csv_str_sorts_and_parses() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.observations()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2015, 12, 20).unwrap());
        assert_eq!(first.average_price, 1.35);
        assert_eq!(first.avocado_type, AvocadoType::Conventional);
        assert_eq!(first.region, "Albany");

        assert_eq!(dataset.types(), [AvocadoType::Conventional, AvocadoType::Organic]);
    }

    #[test]
    fn load_ignores_column_order_and_extras() {
        let csv = "\
region,year,type,XLarge Bags,Large Bags,Small Bags,Total Bags,Total Volume,AveragePrice,Date,extra
Denver,2017,organic,0,10,20,30,100,1.9,2017-01-01,ignored
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let obs = &dataset.observations()[0];
        assert_eq!(obs.region, "Denver");
        assert_eq!(obs.total_bags, 30.0);
        assert_eq!(obs.average_price, 1.9);
    }

    #[test]
    fn load_reports_missing_column() {
        let csv = "Date,AveragePrice,type,year,region\n2015-12-27,1.33,organic,2015,Albany\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        match err {
            DatasetError::DataMalformed(msg) => assert!(msg.contains("Total Volume"), "{}", msg),
            other => panic!("expected DataMalformed, got {:?}", other),
        }
    }

    #[test]
    fn load_reports_unparseable_date_with_row() {
        let csv = CSV.replace("2015-12-20", "12/20/2015");
        let err = Dataset::from_csv_str(&csv).unwrap_err();
        match err {
            DatasetError::DataMalformed(msg) => {
                assert!(msg.starts_with("row 2"), "{}", msg);
                assert!(msg.contains("12/20/2015"), "{}", msg);
            }
            other => panic!("expected DataMalformed, got {:?}", other),
        }
    }

    #[test]
    fn load_reports_unknown_type() {
        let csv = CSV.replace("organic", "heirloom");
        let err = Dataset::from_csv_str(&csv).unwrap_err();
        assert!(err.to_string().contains("heirloom"), "{}", err);
    }

    #[test]
    fn load_reports_non_numeric_value() {
        let csv = CSV.replace("64236.62", "lots");
        let err = Dataset::from_csv_str(&csv).unwrap_err();
        assert!(matches!(err, DatasetError::DataMalformed(_)));
    }

    #[test]
    fn load_rejects_header_only_file() {
        let header = CSV.lines().next().unwrap();
        let err = Dataset::from_csv_str(header).unwrap_err();
        assert!(matches!(err, DatasetError::DataMalformed(_)));
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let err = Dataset::load(temp_path("does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::DataUnavailable { .. }));
    }

    #[test]
    fn load_plain_and_gzip_files_agree() {
        let plain_path = temp_path("plain.csv");
        std::fs::write(&plain_path, CSV).unwrap();

        let gz_path = temp_path("packed.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        std::fs::write(&gz_path, encoder.finish().unwrap()).unwrap();

        let plain = Dataset::load(&plain_path).unwrap();
        let packed = Dataset::load(&gz_path).unwrap();
        assert_eq!(plain.observations(), packed.observations());

        std::fs::remove_file(plain_path).unwrap();
        std::fs::remove_file(gz_path).unwrap();
    }
}
