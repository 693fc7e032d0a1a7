pub mod customer;
pub mod health;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// JSON 404 for unmatched paths
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

/// JSON 405 for a known path hit with the wrong method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("{} is not supported on {}", method, uri.path()))
}
