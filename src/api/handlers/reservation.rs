use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = state.reservation_repo.list().await?;
    Ok(Json(reservations))
}
