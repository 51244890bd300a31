//! Search command implementation

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::enums::SearchType;
use crate::fred::SeriesSearchQuery;
use crate::output::csv::CsvSeriesWriter;
use crate::output::{OutputWriter, SeriesWriter};

use super::{Cli, CliError};

/// Arguments for searching series
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// The words to match against economic data series
    pub text: String,

    /// Search type: full_text or series_id
    #[arg(long, default_value = "full_text")]
    pub search_type: String,

    /// Show at most this many results
    #[arg(long)]
    pub top: Option<usize>,

    /// Output CSV path; prints a table to stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl SearchArgs {
    /// Run the search and print or write the matching series.
    pub async fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let fred = cli.client()?;

        let query = SeriesSearchQuery {
            search_type: Some(
                SearchType::from_str(&self.search_type).map_err(CliError::InvalidArgument)?,
            ),
            ..Default::default()
        };

        let mut results = fred.series_search(&self.text, &query).await?;
        info!("Search matched {} series", results.len());

        if let Some(top) = self.top {
            results.truncate(top);
        }

        match &self.output {
            Some(path) => {
                let mut writer = CsvSeriesWriter::new(path)?;
                writer.write_series_list(&results)?;
                writer.close()?;
                info!("Wrote {} series to {}", results.len(), path.display());
            }
            None => {
                for series in &results {
                    println!(
                        "{:<20} {:<4} {:<5} {}",
                        series.id,
                        series.frequency_short,
                        series.seasonal_adjustment_short,
                        series.title
                    );
                }
            }
        }

        Ok(())
    }
}
