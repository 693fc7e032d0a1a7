pub mod create;
pub mod delete;
pub mod get;
pub mod search;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use get::{get, list};
pub use search::search;
pub use update::update;

use serde::Serialize;

use crate::database::models::Customer;
use crate::error::ApiError;

/// Body returned by writes: the customer id and a human readable outcome
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub message: String,
}

/// Parse the `{id}` path segment
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid customer id: {}", raw)))
}

/// Decode a customer body. The content-type header is not consulted.
pub(crate) fn decode_customer(body: &[u8]) -> Result<Customer, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::invalid_json(format!("Unable to decode the request body: {}", e)))
}
