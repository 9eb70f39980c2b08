use axum::{response::IntoResponse, Json};
use crate::domain::models::region::REGIONS;

pub async fn list_regions() -> impl IntoResponse {
    Json(REGIONS)
}
