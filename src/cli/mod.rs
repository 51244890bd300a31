//! CLI command implementations

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::rate_limit::Quota;
use crate::Fred;

pub mod error;
pub mod observations;
pub mod search;
pub mod series;

pub use error::CliError;

/// FRED command line client
#[derive(Parser, Debug)]
#[command(name = "stlouisfed")]
#[command(about = "Fetch economic data from the St. Louis Fed FRED API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// FRED API key (32 character alphanumeric string)
    #[arg(long, global = true, env = "STLOUISFED_API_KEY")]
    pub api_key: Option<String>,

    /// Maximum API calls per minute (the documented service quota is 120)
    #[arg(long, global = true, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub max_calls: u32,

    /// Disable the client-side call gate
    #[arg(long, global = true, default_value_t = false)]
    pub no_rate_limit: bool,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the observations of an economic data series
    Observations(observations::ObservationsArgs),

    /// Search for economic data series
    Search(search::SearchArgs),

    /// Show the metadata of an economic data series
    Series(series::SeriesArgs),
}

impl Cli {
    /// Build the API client from the global arguments.
    pub fn client(&self) -> Result<Fred, CliError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CliError::ConfigurationError(
                "missing API key: pass --api-key or set STLOUISFED_API_KEY".to_string(),
            )
        })?;

        let fred = if self.no_rate_limit {
            Fred::without_rate_limit(api_key)?
        } else {
            let quota = Quota::new(self.max_calls, Duration::from_secs(60)).ok_or_else(|| {
                CliError::ConfigurationError("max_calls must be positive".to_string())
            })?;
            Fred::with_quota(api_key, quota)?
        };

        Ok(fred)
    }
}
