//! CSV output writer implementation

use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info};

use crate::{Observation, Series};

use super::{ObservationsWriter, OutputError, OutputResult, OutputWriter, SeriesWriter};

const DEFAULT_BUFFER_SIZE: usize = 8192; // 8KB buffer

/// Flush every N records so a crash loses at most one batch.
const FLUSH_INTERVAL: u64 = 1_000;

/// The service's own CSV downloads mark missing values with a dot; keep the
/// convention so files diff cleanly against them.
const EMPTY_CSV_VALUE: &str = ".";

/// CSV record for one observation
#[derive(Debug, Serialize)]
struct ObservationRecord {
    date: String,
    value: String,
    realtime_start: String,
    realtime_end: String,
}

impl From<&Observation> for ObservationRecord {
    fn from(observation: &Observation) -> Self {
        Self {
            date: observation.date.to_string(),
            value: observation
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| EMPTY_CSV_VALUE.to_string()),
            realtime_start: observation.realtime_start.to_string(),
            realtime_end: observation.realtime_end.to_string(),
        }
    }
}

/// CSV record for one series listing row
#[derive(Debug, Serialize)]
struct SeriesRecord {
    id: String,
    title: String,
    frequency: String,
    units: String,
    seasonal_adjustment: String,
    observation_start: String,
    observation_end: String,
    last_updated: String,
    popularity: i32,
}

impl From<&Series> for SeriesRecord {
    fn from(series: &Series) -> Self {
        Self {
            id: series.id.clone(),
            title: series.title.clone(),
            frequency: series.frequency_short.clone(),
            units: series.units_short.clone(),
            seasonal_adjustment: series.seasonal_adjustment_short.clone(),
            observation_start: series.observation_start.to_string(),
            observation_end: series.observation_end.to_string(),
            last_updated: series.last_updated.to_rfc3339(),
            popularity: series.popularity,
        }
    }
}

fn create_csv_writer<P: AsRef<Path>>(path: P) -> OutputResult<Writer<BufWriter<File>>> {
    let path = path.as_ref();
    info!("Creating CSV writer: path={}", path.display());

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| OutputError::IoError(format!("Failed to create directory: {}", e)))?;
    }

    let file = File::create(path)
        .map_err(|e| OutputError::IoError(format!("Failed to create file: {}", e)))?;

    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    Ok(Writer::from_writer(buf_writer))
}

fn close_csv_writer(
    mut writer: Writer<BufWriter<File>>,
    records_written: u64,
) -> OutputResult<()> {
    debug!("Closing CSV writer: {} total records written", records_written);

    writer
        .flush()
        .map_err(|e| OutputError::FlushError(format!("Failed to flush: {}", e)))?;

    let buf_writer = writer
        .into_inner()
        .map_err(|e| OutputError::IoError(format!("Failed to get inner writer: {}", e)))?;

    let file = buf_writer
        .into_inner()
        .map_err(|e| OutputError::IoError(format!("Failed to get file handle: {}", e)))?;

    file.sync_all()
        .map_err(|e| OutputError::IoError(format!("Failed to sync file: {}", e)))?;

    info!("CSV writer closed successfully: {} records written", records_written);
    Ok(())
}

/// CSV writer for series observations
pub struct CsvObservationsWriter {
    writer: Writer<BufWriter<File>>,
    observations_written: u64,
}

impl CsvObservationsWriter {
    /// Create a new CSV observations writer
    ///
    /// # Arguments
    /// * `path` - Output file path; parent directories are created as needed
    pub fn new<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        Ok(Self {
            writer: create_csv_writer(path)?,
            observations_written: 0,
        })
    }

    /// Get number of observations written so far
    pub fn observations_written(&self) -> u64 {
        self.observations_written
    }
}

impl ObservationsWriter for CsvObservationsWriter {
    fn write_observation(&mut self, observation: &Observation) -> OutputResult<()> {
        let record = ObservationRecord::from(observation);

        self.writer
            .serialize(&record)
            .map_err(|e| OutputError::CsvError(format!("Failed to write observation: {}", e)))?;

        self.observations_written += 1;

        if self.observations_written % FLUSH_INTERVAL == 0 {
            self.flush()?;
            debug!("Progress: {} observations written", self.observations_written);
        }

        Ok(())
    }
}

impl OutputWriter for CsvObservationsWriter {
    fn flush(&mut self) -> OutputResult<()> {
        self.writer
            .flush()
            .map_err(|e| OutputError::FlushError(format!("Failed to flush: {}", e)))
    }

    fn close(self) -> OutputResult<()> {
        close_csv_writer(self.writer, self.observations_written)
    }
}

/// CSV writer for series metadata listings
pub struct CsvSeriesWriter {
    writer: Writer<BufWriter<File>>,
    series_written: u64,
}

impl CsvSeriesWriter {
    /// Create a new CSV series writer
    ///
    /// # Arguments
    /// * `path` - Output file path; parent directories are created as needed
    pub fn new<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        Ok(Self {
            writer: create_csv_writer(path)?,
            series_written: 0,
        })
    }

    /// Get number of series records written so far
    pub fn series_written(&self) -> u64 {
        self.series_written
    }
}

impl SeriesWriter for CsvSeriesWriter {
    fn write_series(&mut self, series: &Series) -> OutputResult<()> {
        let record = SeriesRecord::from(series);

        self.writer
            .serialize(&record)
            .map_err(|e| OutputError::CsvError(format!("Failed to write series: {}", e)))?;

        self.series_written += 1;

        if self.series_written % FLUSH_INTERVAL == 0 {
            self.flush()?;
        }

        Ok(())
    }
}

impl OutputWriter for CsvSeriesWriter {
    fn flush(&mut self) -> OutputResult<()> {
        self.writer
            .flush()
            .map_err(|e| OutputError::FlushError(format!("Failed to flush: {}", e)))
    }

    fn close(self) -> OutputResult<()> {
        close_csv_writer(self.writer, self.series_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_observation(value: Option<Decimal>) -> Observation {
        Observation {
            realtime_start: NaiveDate::from_ymd_opt(2013, 8, 14).unwrap(),
            realtime_end: NaiveDate::from_ymd_opt(2013, 8, 14).unwrap(),
            date: NaiveDate::from_ymd_opt(1929, 1, 1).unwrap(),
            value,
        }
    }

    #[test]
    fn test_observation_record_formats_value() {
        let record =
            ObservationRecord::from(&sample_observation(Some(Decimal::from_str("1065.9").unwrap())));
        assert_eq!(record.date, "1929-01-01");
        assert_eq!(record.value, "1065.9");
    }

    #[test]
    fn test_observation_record_marks_missing_value() {
        let record = ObservationRecord::from(&sample_observation(None));
        assert_eq!(record.value, ".");
    }

    #[test]
    fn test_writes_observations_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("observations.csv");

        let mut writer = CsvObservationsWriter::new(&path).unwrap();
        writer
            .write_observations(&[
                sample_observation(Some(Decimal::from_str("1065.9").unwrap())),
                sample_observation(None),
            ])
            .unwrap();
        assert_eq!(writer.observations_written(), 2);
        writer.close().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,value,realtime_start,realtime_end"
        );
        assert!(lines.next().unwrap().starts_with("1929-01-01,1065.9"));
        assert!(lines.next().unwrap().starts_with("1929-01-01,."));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/output/observations.csv");

        let writer = CsvObservationsWriter::new(&path).unwrap();
        writer.close().unwrap();

        assert!(path.exists());
    }
}
