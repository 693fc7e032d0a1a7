use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use super::{decode_customer, parse_id, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /api/customer/:id - Replace a customer's fields
///
/// Zero rows affected is still a success; the count is in the message.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let customer = decode_customer(&body)?;
    let affected = state.gateway.update(id, &customer).await?;

    Ok(Json(MessageResponse {
        id,
        message: format!("Customer updated successfully. Total rows/record affected {}", affected),
    }))
}
