// CSV-backed launch record repository
use crate::application::launch_repository::{LaunchRepository, PayloadExtent};
use crate::domain::launch::{LaunchRecord, Outcome};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Columns the loader requires. Anything else in the file is ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Everything here is fatal at startup: the server must not bind its
/// port without a usable launch table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read launch records from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("malformed dataset header: {0}")]
    Header(#[source] csv::Error),
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("dataset row {row}: {reason}")]
    Row { row: u64, reason: String },
    #[error("dataset contains no launch records")]
    Empty,
}

/// Row shape as it appears in the source file. Validated into a
/// `LaunchRecord` before anything downstream sees it.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// In-memory launch table, loaded once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct CsvLaunchRepository {
    records: Vec<LaunchRecord>,
    extent: PayloadExtent,
}

impl CsvLaunchRepository {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: Read>(input: R) -> Result<Self, DatasetError> {
        Self::from_csv(csv::Reader::from_reader(input))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let headers = reader.headers().map_err(DatasetError::Header)?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
            // 1-based data row number, header excluded
            let row_number = index as u64 + 1;
            let raw = row.map_err(|e| DatasetError::Row {
                row: row_number,
                reason: e.to_string(),
            })?;
            records.push(Self::validate(row_number, raw)?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let extent = Self::payload_extent_of(&records);
        Ok(Self { records, extent })
    }

    fn validate(row: u64, raw: RawRecord) -> Result<LaunchRecord, DatasetError> {
        let outcome = Outcome::from_class(raw.class).ok_or(DatasetError::Row {
            row,
            reason: format!("class must be 0 or 1, got {}", raw.class),
        })?;

        if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
            return Err(DatasetError::Row {
                row,
                reason: format!(
                    "payload mass must be a non-negative number, got {}",
                    raw.payload_mass_kg
                ),
            });
        }

        Ok(LaunchRecord::new(
            raw.launch_site,
            raw.payload_mass_kg,
            outcome,
            raw.booster_category,
        ))
    }

    fn payload_extent_of(records: &[LaunchRecord]) -> PayloadExtent {
        let mut min_kg = f64::INFINITY;
        let mut max_kg = f64::NEG_INFINITY;

        for record in records {
            min_kg = min_kg.min(record.payload_mass_kg);
            max_kg = max_kg.max(record.payload_mass_kg);
        }

        PayloadExtent { min_kg, max_kg }
    }
}

impl LaunchRepository for CsvLaunchRepository {
    fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    fn payload_extent(&self) -> PayloadExtent {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0 B0003,v1.0
2,CCAFS LC-40,1,525,F9 v1.0 B0005,v1.0
3,KSC LC-39A,1,5300.5,F9 FT B1031,FT
";

    #[test]
    fn test_loads_records_in_source_order() {
        let repository = CsvLaunchRepository::from_reader(SAMPLE.as_bytes()).unwrap();

        let records = repository.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].launch_site, "CCAFS LC-40");
        assert_eq!(records[0].outcome, Outcome::Failure);
        assert_eq!(records[2].launch_site, "KSC LC-39A");
        assert_eq!(records[2].payload_mass_kg, 5300.5);
        assert_eq!(records[2].booster_category, "FT");
    }

    #[test]
    fn test_extent_spans_min_and_max_payload() {
        let repository = CsvLaunchRepository::from_reader(SAMPLE.as_bytes()).unwrap();

        let extent = repository.payload_extent();
        assert_eq!(extent.min_kg, 0.0);
        assert_eq!(extent.max_kg, 5300.5);
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let input = "Launch Site,class,Booster Version Category\nKSC,1,FT\n";

        let err = CsvLaunchRepository::from_reader(input.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn(column) => assert_eq!(column, "Payload Mass (kg)"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_class_outside_binary_domain_fails() {
        let input = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,2,100,FT
";

        let err = CsvLaunchRepository::from_reader(input.as_bytes()).unwrap_err();
        match err {
            DatasetError::Row { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("class must be 0 or 1"));
            }
            other => panic!("expected Row, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_payload_fails() {
        let input = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,-5,FT
";

        let err = CsvLaunchRepository::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Row { row: 1, .. }));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let input = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";

        let err = CsvLaunchRepository::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_missing_file_fails_with_the_path() {
        let err = CsvLaunchRepository::load(Path::new("no/such/file.csv")).unwrap_err();
        match err {
            DatasetError::Read { path, .. } => assert_eq!(path, "no/such/file.csv"),
            other => panic!("expected Read, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let repository = CsvLaunchRepository::load(file.path()).unwrap();
        assert_eq!(repository.records().len(), 3);
    }
}
