//! Data output writers

use crate::{Observation, Series};

pub mod csv;

/// Output writer errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// CSV write error
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Buffer flush error
    #[error("flush error: {0}")]
    FlushError(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Generic output writer trait
pub trait OutputWriter {
    /// Flush any buffered data to disk
    fn flush(&mut self) -> OutputResult<()>;

    /// Close the writer and finalize output
    fn close(self) -> OutputResult<()>;
}

/// Trait for writing series observations
pub trait ObservationsWriter: OutputWriter {
    /// Write a single observation to output
    fn write_observation(&mut self, observation: &Observation) -> OutputResult<()>;

    /// Write multiple observations at once
    fn write_observations(&mut self, observations: &[Observation]) -> OutputResult<()> {
        for observation in observations {
            self.write_observation(observation)?;
        }
        Ok(())
    }
}

/// Trait for writing series metadata listings
pub trait SeriesWriter: OutputWriter {
    /// Write a single series record to output
    fn write_series(&mut self, series: &Series) -> OutputResult<()>;

    /// Write multiple series records at once
    fn write_series_list(&mut self, series: &[Series]) -> OutputResult<()> {
        for record in series {
            self.write_series(record)?;
        }
        Ok(())
    }
}
