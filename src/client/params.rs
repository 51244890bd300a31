//! Query-parameter normalization
//!
//! The service expects dates as `YYYY-MM-DD`, update-window timestamps as
//! `YYYYMMDDHHMM`, booleans lowercase, and list parameters joined with a
//! semicolon. Absent optional parameters are omitted from the query string
//! entirely.

use crate::enums::{
    AggregationMethod, FilterValue, FilterVariable, Frequency, OrderBy, OutputType, SearchType,
    SortOrder, TagGroupId, Unit,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Separator for list-valued parameters (`tag_names`, `vintage_dates`, ...).
const LIST_SEPARATOR: &str = ";";

/// A single typed parameter value, prior to wire formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain string
    Str(String),
    /// Integer
    Int(i64),
    /// Calendar date, formatted `YYYY-MM-DD`
    Date(NaiveDate),
    /// Minute-resolution timestamp, formatted `YYYYMMDDHHMM`
    Timestamp(NaiveDateTime),
    /// Boolean, formatted lowercase
    Bool(bool),
    /// List, joined with `;`
    List(Vec<String>),
}

impl ParamValue {
    /// Format this value the way the service expects it on the wire.
    pub fn to_query_value(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            ParamValue::Timestamp(t) => t.format("%Y%m%d%H%M").to_string(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::List(items) => items.join(LIST_SEPARATOR),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::Date(value)
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(value: NaiveDateTime) -> Self {
        ParamValue::Timestamp(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        ParamValue::List(value.to_vec())
    }
}

impl From<SortOrder> for ParamValue {
    fn from(value: SortOrder) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<OrderBy> for ParamValue {
    fn from(value: OrderBy) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<Unit> for ParamValue {
    fn from(value: Unit) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<Frequency> for ParamValue {
    fn from(value: Frequency) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<AggregationMethod> for ParamValue {
    fn from(value: AggregationMethod) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<OutputType> for ParamValue {
    fn from(value: OutputType) -> Self {
        ParamValue::Int(i64::from(value.as_u8()))
    }
}

impl From<SearchType> for ParamValue {
    fn from(value: SearchType) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<FilterVariable> for ParamValue {
    fn from(value: FilterVariable) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<FilterValue> for ParamValue {
    fn from(value: FilterValue) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<TagGroupId> for ParamValue {
    fn from(value: TagGroupId) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

/// Ordered set of wire-formatted query parameters.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: &'static str, value: impl Into<ParamValue>) {
        self.pairs.push((key, value.into().to_query_value()));
    }

    /// Append a parameter when a value is present; omit it otherwise.
    pub fn push_opt(&mut self, key: &'static str, value: Option<impl Into<ParamValue>>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// The formatted key/value pairs, in insertion order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
