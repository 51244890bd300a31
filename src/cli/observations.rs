//! Observations command implementation

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::enums::{Frequency, Unit};
use crate::fred::ObservationsQuery;
use crate::output::csv::CsvObservationsWriter;
use crate::output::{ObservationsWriter, OutputWriter};

use super::{Cli, CliError};

/// Parse a YYYY-MM-DD date argument.
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| CliError::InvalidArgument(format!("Invalid date {input:?}: {e}")))
}

/// Arguments for fetching observations
#[derive(Parser, Debug)]
pub struct ObservationsArgs {
    /// Series id (e.g., GNPCA)
    pub series_id: String,

    /// Start of the observation period (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// End of the observation period (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Data value transformation (lin, chg, ch1, pch, pc1, pca, cch, cca, log)
    #[arg(long)]
    pub units: Option<String>,

    /// Aggregate values to a lower frequency (d, w, bw, m, q, sa, a, ...)
    #[arg(long)]
    pub frequency: Option<String>,

    /// Output CSV path; prints to stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ObservationsArgs {
    /// Fetch the observations and write them to CSV or stdout.
    pub async fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let fred = cli.client()?;

        let query = ObservationsQuery {
            observation_start: self.start.as_deref().map(parse_date).transpose()?,
            observation_end: self.end.as_deref().map(parse_date).transpose()?,
            units: self
                .units
                .as_deref()
                .map(Unit::from_str)
                .transpose()
                .map_err(CliError::InvalidArgument)?,
            frequency: self
                .frequency
                .as_deref()
                .map(Frequency::from_str)
                .transpose()
                .map_err(CliError::InvalidArgument)?,
            ..Default::default()
        };

        let observations = fred.series_observations(&self.series_id, &query).await?;
        info!(
            "Fetched {} observations for {}",
            observations.len(),
            self.series_id
        );

        match &self.output {
            Some(path) => {
                let mut writer = CsvObservationsWriter::new(path)?;
                writer.write_observations(&observations)?;
                writer.close()?;
                info!(
                    "Wrote {} observations to {}",
                    observations.len(),
                    path.display()
                );
            }
            None => {
                for obs in &observations {
                    let value = obs
                        .value
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| ".".to_string());
                    println!("{} {}", obs.date, value);
                }
            }
        }

        Ok(())
    }
}
