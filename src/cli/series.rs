//! Series metadata command implementation

use clap::Parser;

use crate::fred::RealtimePeriod;

use super::{Cli, CliError};

/// Arguments for showing series metadata
#[derive(Parser, Debug)]
pub struct SeriesArgs {
    /// Series id (e.g., GNPCA)
    pub series_id: String,
}

impl SeriesArgs {
    /// Fetch and print the series' metadata.
    pub async fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let fred = cli.client()?;
        let series = fred
            .series(&self.series_id, &RealtimePeriod::default())
            .await?;

        println!("id:                  {}", series.id);
        println!("title:               {}", series.title);
        println!("frequency:           {}", series.frequency);
        println!("units:               {}", series.units);
        println!("seasonal adjustment: {}", series.seasonal_adjustment);
        println!(
            "observations:        {} to {}",
            series.observation_start, series.observation_end
        );
        println!("last updated:        {}", series.last_updated);
        println!("popularity:          {}", series.popularity);
        if let Some(notes) = &series.notes {
            println!("notes:               {notes}");
        }

        Ok(())
    }
}
