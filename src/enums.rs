//! Request-parameter vocabulary
//!
//! Each enum carries the exact wire string (or number) the service expects.
//! Endpoints that accept only a subset of `OrderBy` enforce their allow-list
//! at call time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction for listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending
    #[serde(rename = "asc")]
    Asc,
    /// Descending
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    /// Wire value for this sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

/// Attribute to order listing results by.
///
/// Every listing endpoint accepts a subset of these; the client validates
/// the subset before issuing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Series id
    SeriesId,
    /// Number of series carrying a tag
    SeriesCount,
    /// Series title
    Title,
    /// Units of measurement
    Units,
    /// Data frequency
    Frequency,
    /// Seasonal adjustment
    SeasonalAdjustment,
    /// Start of the real-time period
    RealtimeStart,
    /// End of the real-time period
    RealtimeEnd,
    /// Last update timestamp
    LastUpdated,
    /// First observation date
    ObservationStart,
    /// Last observation date
    ObservationEnd,
    /// Popularity score
    Popularity,
    /// Popularity of the series group
    GroupPopularity,
    /// Tag creation timestamp
    Created,
    /// Name
    Name,
    /// Tag group id
    GroupId,
    /// Full-text search rank
    SearchRank,
    /// Release id
    ReleaseId,
    /// Source id
    SourceId,
    /// Press-release flag
    PressRelease,
    /// Release date
    ReleaseDate,
    /// Release name
    ReleaseName,
}

impl OrderBy {
    /// Wire value for this attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::SeriesId => "series_id",
            OrderBy::SeriesCount => "series_count",
            OrderBy::Title => "title",
            OrderBy::Units => "units",
            OrderBy::Frequency => "frequency",
            OrderBy::SeasonalAdjustment => "seasonal_adjustment",
            OrderBy::RealtimeStart => "realtime_start",
            OrderBy::RealtimeEnd => "realtime_end",
            OrderBy::LastUpdated => "last_updated",
            OrderBy::ObservationStart => "observation_start",
            OrderBy::ObservationEnd => "observation_end",
            OrderBy::Popularity => "popularity",
            OrderBy::GroupPopularity => "group_popularity",
            OrderBy::Created => "created",
            OrderBy::Name => "name",
            OrderBy::GroupId => "group_id",
            OrderBy::SearchRank => "search_rank",
            OrderBy::ReleaseId => "release_id",
            OrderBy::SourceId => "source_id",
            OrderBy::PressRelease => "press_release",
            OrderBy::ReleaseDate => "release_date",
            OrderBy::ReleaseName => "release_name",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "series_id" => Ok(OrderBy::SeriesId),
            "series_count" => Ok(OrderBy::SeriesCount),
            "title" => Ok(OrderBy::Title),
            "units" => Ok(OrderBy::Units),
            "frequency" => Ok(OrderBy::Frequency),
            "seasonal_adjustment" => Ok(OrderBy::SeasonalAdjustment),
            "realtime_start" => Ok(OrderBy::RealtimeStart),
            "realtime_end" => Ok(OrderBy::RealtimeEnd),
            "last_updated" => Ok(OrderBy::LastUpdated),
            "observation_start" => Ok(OrderBy::ObservationStart),
            "observation_end" => Ok(OrderBy::ObservationEnd),
            "popularity" => Ok(OrderBy::Popularity),
            "group_popularity" => Ok(OrderBy::GroupPopularity),
            "created" => Ok(OrderBy::Created),
            "name" => Ok(OrderBy::Name),
            "group_id" => Ok(OrderBy::GroupId),
            "search_rank" => Ok(OrderBy::SearchRank),
            "release_id" => Ok(OrderBy::ReleaseId),
            "source_id" => Ok(OrderBy::SourceId),
            "press_release" => Ok(OrderBy::PressRelease),
            "release_date" => Ok(OrderBy::ReleaseDate),
            "release_name" => Ok(OrderBy::ReleaseName),
            _ => Err(format!("Invalid order_by attribute: {s}")),
        }
    }
}

/// Data value transformation applied server-side to observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Levels (no transformation)
    #[serde(rename = "lin")]
    Lin,
    /// Change
    #[serde(rename = "chg")]
    Chg,
    /// Change from a year ago
    #[serde(rename = "ch1")]
    Ch1,
    /// Percent change
    #[serde(rename = "pch")]
    Pch,
    /// Percent change from a year ago
    #[serde(rename = "pc1")]
    Pc1,
    /// Compounded annual rate of change
    #[serde(rename = "pca")]
    Pca,
    /// Continuously compounded rate of change
    #[serde(rename = "cch")]
    Cch,
    /// Continuously compounded annual rate of change
    #[serde(rename = "cca")]
    Cca,
    /// Natural log
    #[serde(rename = "log")]
    Log,
}

impl Unit {
    /// Wire value for this transformation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Lin => "lin",
            Unit::Chg => "chg",
            Unit::Ch1 => "ch1",
            Unit::Pch => "pch",
            Unit::Pc1 => "pc1",
            Unit::Pca => "pca",
            Unit::Cch => "cch",
            Unit::Cca => "cca",
            Unit::Log => "log",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lin" => Ok(Unit::Lin),
            "chg" => Ok(Unit::Chg),
            "ch1" => Ok(Unit::Ch1),
            "pch" => Ok(Unit::Pch),
            "pc1" => Ok(Unit::Pc1),
            "pca" => Ok(Unit::Pca),
            "cch" => Ok(Unit::Cch),
            "cca" => Ok(Unit::Cca),
            "log" => Ok(Unit::Log),
            _ => Err(format!("Invalid unit: {s}")),
        }
    }
}

/// Lower frequency to aggregate observation values to.
///
/// The service converts higher-frequency series into lower-frequency ones
/// (daily is the highest, annual the lowest); the aggregation method is
/// chosen separately via [`AggregationMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Daily
    #[serde(rename = "d")]
    Daily,
    /// Weekly
    #[serde(rename = "w")]
    Weekly,
    /// Biweekly
    #[serde(rename = "bw")]
    Biweekly,
    /// Monthly
    #[serde(rename = "m")]
    Monthly,
    /// Quarterly
    #[serde(rename = "q")]
    Quarterly,
    /// Semiannual
    #[serde(rename = "sa")]
    Semiannual,
    /// Annual
    #[serde(rename = "a")]
    Annual,
    /// Weekly, ending Friday
    #[serde(rename = "wef")]
    WeeklyEndingFriday,
    /// Weekly, ending Thursday
    #[serde(rename = "weth")]
    WeeklyEndingThursday,
    /// Weekly, ending Wednesday
    #[serde(rename = "wew")]
    WeeklyEndingWednesday,
    /// Weekly, ending Tuesday
    #[serde(rename = "wetu")]
    WeeklyEndingTuesday,
    /// Weekly, ending Monday
    #[serde(rename = "wem")]
    WeeklyEndingMonday,
    /// Weekly, ending Sunday
    #[serde(rename = "wesu")]
    WeeklyEndingSunday,
    /// Weekly, ending Saturday
    #[serde(rename = "wesa")]
    WeeklyEndingSaturday,
    /// Biweekly, ending Wednesday
    #[serde(rename = "bwew")]
    BiweeklyEndingWednesday,
    /// Biweekly, ending Monday
    #[serde(rename = "bwem")]
    BiweeklyEndingMonday,
}

impl Frequency {
    /// Wire value for this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "d",
            Frequency::Weekly => "w",
            Frequency::Biweekly => "bw",
            Frequency::Monthly => "m",
            Frequency::Quarterly => "q",
            Frequency::Semiannual => "sa",
            Frequency::Annual => "a",
            Frequency::WeeklyEndingFriday => "wef",
            Frequency::WeeklyEndingThursday => "weth",
            Frequency::WeeklyEndingWednesday => "wew",
            Frequency::WeeklyEndingTuesday => "wetu",
            Frequency::WeeklyEndingMonday => "wem",
            Frequency::WeeklyEndingSunday => "wesu",
            Frequency::WeeklyEndingSaturday => "wesa",
            Frequency::BiweeklyEndingWednesday => "bwew",
            Frequency::BiweeklyEndingMonday => "bwem",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Frequency::Daily),
            "w" => Ok(Frequency::Weekly),
            "bw" => Ok(Frequency::Biweekly),
            "m" => Ok(Frequency::Monthly),
            "q" => Ok(Frequency::Quarterly),
            "sa" => Ok(Frequency::Semiannual),
            "a" => Ok(Frequency::Annual),
            "wef" => Ok(Frequency::WeeklyEndingFriday),
            "weth" => Ok(Frequency::WeeklyEndingThursday),
            "wew" => Ok(Frequency::WeeklyEndingWednesday),
            "wetu" => Ok(Frequency::WeeklyEndingTuesday),
            "wem" => Ok(Frequency::WeeklyEndingMonday),
            "wesu" => Ok(Frequency::WeeklyEndingSunday),
            "wesa" => Ok(Frequency::WeeklyEndingSaturday),
            "bwew" => Ok(Frequency::BiweeklyEndingWednesday),
            "bwem" => Ok(Frequency::BiweeklyEndingMonday),
            _ => Err(format!("Invalid frequency: {s}")),
        }
    }
}

/// Aggregation method used for frequency aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationMethod {
    /// Average of the period's values
    #[serde(rename = "avg")]
    Average,
    /// Sum of the period's values
    #[serde(rename = "sum")]
    Sum,
    /// Last value of the period
    #[serde(rename = "eop")]
    EndOfPeriod,
}

impl AggregationMethod {
    /// Wire value for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMethod::Average => "avg",
            AggregationMethod::Sum => "sum",
            AggregationMethod::EndOfPeriod => "eop",
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AggregationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(AggregationMethod::Average),
            "sum" => Ok(AggregationMethod::Sum),
            "eop" => Ok(AggregationMethod::EndOfPeriod),
            _ => Err(format!("Invalid aggregation method: {s}")),
        }
    }
}

/// Observation output layout. Numeric on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputType {
    /// Observations by real-time period
    RealtimePeriod,
    /// Observations by vintage date, all observations
    All,
    /// Observations by vintage date, new and revised only
    NewAndRevised,
    /// Initial release only
    InitialReleaseOnly,
}

impl OutputType {
    /// Wire value for this output type.
    pub fn as_u8(&self) -> u8 {
        match self {
            OutputType::RealtimePeriod => 1,
            OutputType::All => 2,
            OutputType::NewAndRevised => 3,
            OutputType::InitialReleaseOnly => 4,
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(OutputType::RealtimePeriod),
            "2" => Ok(OutputType::All),
            "3" => Ok(OutputType::NewAndRevised),
            "4" => Ok(OutputType::InitialReleaseOnly),
            _ => Err(format!("Invalid output type: {s}")),
        }
    }
}

/// Kind of series search to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    /// Full-text search over title, units, frequency, and tags
    #[serde(rename = "full_text")]
    FullText,
    /// Substring search on series ids; `*` anchors and wildcards
    #[serde(rename = "series_id")]
    SeriesId,
}

impl SearchType {
    /// Wire value for this search type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::FullText => "full_text",
            SearchType::SeriesId => "series_id",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_text" => Ok(SearchType::FullText),
            "series_id" => Ok(SearchType::SeriesId),
            _ => Err(format!("Invalid search type: {s}")),
        }
    }
}

/// Attribute that series listings can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterVariable {
    /// Data frequency
    Frequency,
    /// Units of measurement
    Units,
    /// Seasonal adjustment
    SeasonalAdjustment,
}

impl FilterVariable {
    /// Wire value for this attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterVariable::Frequency => "frequency",
            FilterVariable::Units => "units",
            FilterVariable::SeasonalAdjustment => "seasonal_adjustment",
        }
    }
}

impl fmt::Display for FilterVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterVariable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(FilterVariable::Frequency),
            "units" => Ok(FilterVariable::Units),
            "seasonal_adjustment" => Ok(FilterVariable::SeasonalAdjustment),
            _ => Err(format!("Invalid filter variable: {s}")),
        }
    }
}

/// Geographic scope filter for series-update listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// Macroeconomic series: whole countries, not US subregions
    Macro,
    /// US states, counties, and metropolitan statistical areas
    Regional,
    /// All series
    All,
}

impl FilterValue {
    /// Wire value for this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterValue::Macro => "macro",
            FilterValue::Regional => "regional",
            FilterValue::All => "all",
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macro" => Ok(FilterValue::Macro),
            "regional" => Ok(FilterValue::Regional),
            "all" => Ok(FilterValue::All),
            _ => Err(format!("Invalid filter value: {s}")),
        }
    }
}

/// Tag group: the facet a tag belongs to.
///
/// Appears both as a request filter and in tag payloads (`group_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagGroupId {
    /// Frequency
    #[serde(rename = "freq")]
    Frequency,
    /// General or concept
    #[serde(rename = "gen")]
    GeneralOrConcept,
    /// Geography
    #[serde(rename = "geo")]
    Geography,
    /// Geography type
    #[serde(rename = "geot")]
    GeographyType,
    /// Release
    #[serde(rename = "rls")]
    Release,
    /// Seasonal adjustment
    #[serde(rename = "seas")]
    SeasonalAdjustment,
    /// Source
    #[serde(rename = "src")]
    Source,
    /// Citation and copyright
    #[serde(rename = "cc")]
    CitationAndCopyright,
}

impl TagGroupId {
    /// Wire value for this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagGroupId::Frequency => "freq",
            TagGroupId::GeneralOrConcept => "gen",
            TagGroupId::Geography => "geo",
            TagGroupId::GeographyType => "geot",
            TagGroupId::Release => "rls",
            TagGroupId::SeasonalAdjustment => "seas",
            TagGroupId::Source => "src",
            TagGroupId::CitationAndCopyright => "cc",
        }
    }
}

impl fmt::Display for TagGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TagGroupId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freq" => Ok(TagGroupId::Frequency),
            "gen" => Ok(TagGroupId::GeneralOrConcept),
            "geo" => Ok(TagGroupId::Geography),
            "geot" => Ok(TagGroupId::GeographyType),
            "rls" => Ok(TagGroupId::Release),
            "seas" => Ok(TagGroupId::SeasonalAdjustment),
            "src" => Ok(TagGroupId::Source),
            "cc" => Ok(TagGroupId::CitationAndCopyright),
            _ => Err(format!("Invalid tag group id: {s}")),
        }
    }
}
