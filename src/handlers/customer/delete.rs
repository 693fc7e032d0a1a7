use axum::{
    extract::{Path, State},
    Json,
};

use super::{parse_id, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// DELETE /api/deletecustomer/:id - Remove a customer
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let affected = state.gateway.delete(id).await?;

    Ok(Json(MessageResponse {
        id,
        message: format!("Customer deleted successfully. Total rows/record affected {}", affected),
    }))
}
