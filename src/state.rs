use std::sync::Arc;

use crate::database::CustomerGateway;

/// Shared by every handler through axum `State`
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn CustomerGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CustomerGateway>) -> Self {
        Self { gateway }
    }
}
