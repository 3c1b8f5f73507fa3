//! CSV loading and row validation.
//!
//! Parsing is delegated to the `csv` crate; this module only enforces
//! the row invariants the rest of the system relies on (outcome is
//! exactly 0 or 1, payload mass is non-negative, dataset is non-empty).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::schema::{LaunchRecord, RawRecord};
use crate::utils::error::DatasetError;

/// Load launch records from a CSV file.
///
/// **Public** - called once from startup. Any failure here is fatal:
/// the process cannot serve without a valid dataset.
pub fn load_records(path: &Path) -> Result<Vec<LaunchRecord>, DatasetError> {
    info!("Loading launch records from {}", path.display());
    let file = File::open(path)?;
    let records = read_records(file)?;
    info!("Loaded {} launch records", records.len());
    Ok(records)
}

/// Read and validate launch records from any CSV source.
///
/// **Public** - split from [`load_records`] so tests can feed CSV text
/// directly without touching the filesystem.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<LaunchRecord>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        records.push(validate_row(index, raw)?);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    debug!("Parsed {} rows", records.len());
    Ok(records)
}

/// Validate one raw row and convert it to a [`LaunchRecord`]
///
/// **Private** - row numbers in errors are 1-based data rows, matching
/// how people count rows in a spreadsheet (header excluded).
fn validate_row(index: usize, raw: RawRecord) -> Result<LaunchRecord, DatasetError> {
    let row = index + 1;

    let outcome = match raw.outcome {
        0 => 0u8,
        1 => 1u8,
        value => return Err(DatasetError::InvalidOutcome { row, value }),
    };

    if raw.payload_mass_kg < 0.0 {
        return Err(DatasetError::NegativePayload {
            row,
            value: raw.payload_mass_kg,
        });
    }

    Ok(LaunchRecord {
        site: raw.site,
        payload_mass_kg: raw.payload_mass_kg,
        outcome,
        booster_category: raw.booster_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Launch Site,Payload Mass (kg),class,Booster Version Category";

    fn csv_bytes(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.into_bytes()
    }

    #[test]
    fn test_read_valid_rows() {
        let data = csv_bytes(&[
            "CCAFS LC-40,2500.5,1,FT",
            "VAFB SLC-4E,500,0,v1.0",
        ]);
        let records = read_records(data.as_slice()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].site, "CCAFS LC-40");
        assert_eq!(records[0].payload_mass_kg, 2500.5);
        assert!(records[0].is_success());
        assert_eq!(records[1].booster_category, "v1.0");
        assert!(!records[1].is_success());
    }

    #[test]
    fn test_rejects_bad_outcome() {
        let data = csv_bytes(&["CCAFS LC-40,2500,2,FT"]);
        let err = read_records(data.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidOutcome { row: 1, value: 2 }
        ));
    }

    #[test]
    fn test_rejects_negative_payload() {
        let data = csv_bytes(&["CCAFS LC-40,-10,1,FT"]);
        let err = read_records(data.as_slice()).unwrap_err();
        assert!(matches!(err, DatasetError::NegativePayload { row: 1, .. }));
    }

    #[test]
    fn test_rejects_empty_dataset() {
        let data = csv_bytes(&[]);
        let err = read_records(data.as_slice()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_rejects_missing_column() {
        let data = b"Launch Site,class\nCCAFS LC-40,1".to_vec();
        assert!(matches!(
            read_records(data.as_slice()),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records(Path::new("/nonexistent/launches.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
