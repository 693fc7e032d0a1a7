use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Unknown search field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid match mode: {0} (expected 'all' or 'any')")]
    InvalidCombinator(String),

    #[error("At least one search field is required")]
    Empty,
}
