use chrono::{DateTime, Utc};
use std::str::FromStr;

use super::error::FilterError;
use super::field::CustomerField;

/// How conditions on different fields are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    /// Every condition must hold
    #[default]
    All,
    /// At least one condition must hold
    Any,
}

impl Combinator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Combinator::All => " AND ",
            Combinator::Any => " OR ",
        }
    }
}

impl FromStr for Combinator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(Combinator::All),
            "any" | "or" => Ok(Combinator::Any),
            _ => Err(FilterError::InvalidCombinator(s.to_string())),
        }
    }
}

/// A search value already parsed to its column type
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Bool(bool),
    Text(String),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: CustomerField,
    /// Matches when the column equals any of these
    pub values: Vec<FilterValue>,
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<FilterValue>,
}
