//! # stlouisfed
//!
//! Typed async client for the FRED and ALFRED web services of the Federal
//! Reserve Bank of St. Louis: economic time series, their releases, sources,
//! categories, and tags.
//!
//! ## Features
//!
//! - **Typed endpoint catalog**: every documented FRED/ALFRED listing as a
//!   method returning typed records, with upstream defaults and parameter
//!   validation applied client-side
//! - **Call-rate ceiling**: a sliding-window rate limiter owned by the client
//!   keeps aggregate request volume under the service quota (120 calls per
//!   60 seconds) without ever rejecting a call
//! - **Quirk normalization**: service date ranges, the `.` empty-value
//!   sentinel, hour-only UTC offsets, and the service's Central-time "today"
//!   are handled once, in the client
//! - **Transparent pagination**: listing endpoints are drained across pages
//!   automatically
//!
//! ## Quick Start
//!
//! ```no_run
//! use stlouisfed::Fred;
//! use stlouisfed::fred::ObservationsQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fred = Fred::new("abcdefghijklmnopqrstuvwxyz123456")?;
//!
//! // Real Gross National Product, as currently published
//! let observations = fred
//!     .series_observations("GNPCA", &ObservationsQuery::default())
//!     .await?;
//!
//! for obs in observations.iter().take(5) {
//!     println!("{} {:?}", obs.date, obs.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`rate_limit`] - sliding-window call gate shared by one client's requests
//! - [`client`] - query normalization, HTTP dispatch, error mapping, paging
//! - [`enums`] - request-parameter vocabulary with exact wire values
//! - [`fred`] - the endpoint catalog ([`Fred`], with [`Alfred`] as the
//!   vintage-aware alias)
//! - [`output`] - CSV writers for fetched records
//! - [`cli`] - companion command-line interface

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::TagGroupId;

/// CLI command implementations
pub mod cli;

/// Rate-limited HTTP core
pub mod client;

mod de;

/// Request-parameter vocabulary
pub mod enums;

/// FRED/ALFRED endpoint catalog
pub mod fred;

/// Data output writers
pub mod output;

/// Client-side call-rate ceiling
pub mod rate_limit;

// Re-export commonly used types
pub use client::{ClientError, ClientResult};
pub use fred::{Alfred, Fred};
pub use rate_limit::{Quota, RateLimiter};

/// A node of the category tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category id; 0 is the root
    pub id: u32,
    /// Category name
    pub name: String,
    /// Id of the parent category; the root is its own parent
    pub parent_id: u32,
}

impl Category {
    /// Validate category data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Category name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// An economic data series and its descriptive metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Series id (e.g., "GNPCA")
    pub id: String,
    /// Start of the real-time period this record describes
    pub realtime_start: NaiveDate,
    /// End of the real-time period this record describes
    pub realtime_end: NaiveDate,
    /// Series title
    pub title: String,
    /// Date of the first observation
    pub observation_start: NaiveDate,
    /// Date of the last observation
    pub observation_end: NaiveDate,
    /// Data frequency, long form (e.g., "Annual")
    pub frequency: String,
    /// Data frequency, short form (e.g., "A")
    pub frequency_short: String,
    /// Units of measurement, long form
    pub units: String,
    /// Units of measurement, short form
    pub units_short: String,
    /// Seasonal adjustment, long form
    pub seasonal_adjustment: String,
    /// Seasonal adjustment, short form
    pub seasonal_adjustment_short: String,
    /// When the series data was last updated
    #[serde(deserialize_with = "de::fred_timestamp")]
    pub last_updated: DateTime<Utc>,
    /// Popularity score
    pub popularity: i32,
    /// Popularity of the series group; present in search and update payloads
    #[serde(default)]
    pub group_popularity: Option<i32>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Series {
    /// Validate series data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("Series id cannot be empty".to_string());
        }

        if self.observation_end < self.observation_start {
            return Err(format!(
                "Observation end ({}) must not be before observation start ({})",
                self.observation_end, self.observation_start
            ));
        }

        if self.realtime_end < self.realtime_start {
            return Err(format!(
                "Realtime end ({}) must not be before realtime start ({})",
                self.realtime_end, self.realtime_start
            ));
        }

        Ok(())
    }
}

/// A single observation of a series.
///
/// `value` is `None` where the service reports no value recorded (the `.`
/// sentinel in raw payloads).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Observation {
    /// Start of the real-time period this value was published in
    pub realtime_start: NaiveDate,
    /// End of the real-time period this value was published in
    pub realtime_end: NaiveDate,
    /// Observation date
    pub date: NaiveDate,
    /// Observed value, if any was recorded
    #[serde(deserialize_with = "de::observation_value")]
    pub value: Option<Decimal>,
}

impl Observation {
    /// Validate observation data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.realtime_end < self.realtime_start {
            return Err(format!(
                "Realtime end ({}) must not be before realtime start ({})",
                self.realtime_end, self.realtime_start
            ));
        }
        Ok(())
    }
}

/// A release of economic data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Release {
    /// Release id
    pub id: u32,
    /// Start of the real-time period this record describes
    pub realtime_start: NaiveDate,
    /// End of the real-time period this record describes
    pub realtime_end: NaiveDate,
    /// Release name
    pub name: String,
    /// Whether the release is a press release
    pub press_release: bool,
    /// Link to the release on the publisher's site
    #[serde(default)]
    pub link: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Release {
    /// Validate release data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Release name cannot be empty".to_string());
        }

        if self.realtime_end < self.realtime_start {
            return Err(format!(
                "Realtime end ({}) must not be before realtime start ({})",
                self.realtime_end, self.realtime_start
            ));
        }

        Ok(())
    }
}

/// A date on which a release was (or will be) published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseDate {
    /// Id of the release
    pub release_id: u32,
    /// Release name; present in the all-releases listing only
    #[serde(default)]
    pub release_name: Option<String>,
    /// Publication date
    pub date: NaiveDate,
}

/// A source of economic data, such as a statistical agency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Source id
    pub id: u32,
    /// Start of the real-time period this record describes
    pub realtime_start: NaiveDate,
    /// End of the real-time period this record describes
    pub realtime_end: NaiveDate,
    /// Source name
    pub name: String,
    /// Link to the source's site
    #[serde(default)]
    pub link: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Source {
    /// Validate source data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Source name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// A tag attached to series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Facet the tag belongs to
    pub group_id: TagGroupId,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// When the tag was created
    #[serde(deserialize_with = "de::fred_timestamp")]
    pub created: DateTime<Utc>,
    /// Popularity score
    pub popularity: i32,
    /// Number of series carrying the tag
    pub series_count: u64,
}

impl Tag {
    /// Validate tag data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Tag name cannot be empty".to_string());
        }
        Ok(())
    }
}
