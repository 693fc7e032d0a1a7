use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use super::{decode_customer, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/newcustomer - Insert a customer and return its new id
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Json<MessageResponse>, ApiError> {
    let customer = decode_customer(&body)?;
    let id = state.gateway.create(&customer).await?;

    info!("Created customer {}", id);
    Ok(Json(MessageResponse {
        id,
        message: "Customer created successfully".to_string(),
    }))
}
