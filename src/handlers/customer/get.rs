use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_id;
use crate::database::models::Customer;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/customer/:id - Get a single customer by id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Customer>, ApiError> {
    let id = parse_id(&id)?;
    state
        .gateway
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Customer {} not found", id)))
}

/// GET /api/customer - List every customer
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.gateway.get_all().await?))
}
