pub mod error;
pub mod field;
pub mod filter;
pub mod types;

pub use error::FilterError;
pub use field::CustomerField;
pub use filter::{build_filter, FilterExpression};
pub use types::*;
