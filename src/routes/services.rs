use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::models::Service;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.store.list_active_services().await?;
    Ok(Json(services))
}
