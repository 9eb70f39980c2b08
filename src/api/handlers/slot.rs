use axum::{extract::{State, Query}, response::IntoResponse, Json};
use chrono::NaiveDate;
use crate::state::AppState;
use crate::api::dtos::{requests::SlotsQuery, responses::{SlotsResponse, SlotView}};
use crate::domain::services::reservation_form::ReservationForm;
use crate::error::AppError;
use std::sync::Arc;

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))
}

/// Slot grid for `date` as the form would render it.
pub async fn slot_grid(form: &ReservationForm, date: Option<NaiveDate>) -> Result<SlotsResponse, AppError> {
    let unavailable = form.get_unavailable_slots_for_date(date).await?;
    let slots = form.time_slots().iter()
        .map(|time| SlotView {
            time: time.clone(),
            unavailable: unavailable.contains(time),
        })
        .collect();

    Ok(SlotsResponse {
        date: date.map(|d| d.format("%Y-%m-%d").to_string()),
        slots,
        available_count: form.get_available_slots_count(date).await?,
    })
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let form = state.new_form();
    Ok(Json(slot_grid(&form, date).await?))
}
