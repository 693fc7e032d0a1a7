use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::collections::BTreeMap;
use tracing::warn;

use crate::database::models::Customer;
use crate::error::ApiError;
use crate::filter::build_filter;
use crate::state::AppState;

/// POST /api/searchcustomer - Filter customers by query-string fields
///
/// `?legal_entity_type=individual&legal_entity_state=active` matches both;
/// add `match=any` to match either.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in pairs {
        params.entry(name).or_default().push(value);
    }

    let filter = build_filter(&params).map_err(|e| {
        warn!("Rejected search: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(state.gateway.search(&filter).await?))
}
