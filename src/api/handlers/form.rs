use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::UpdateDraftRequest, responses::{FormResponse, SubmitResponse}};
use crate::api::handlers::slot::{parse_date, slot_grid};
use crate::domain::models::reservation::DraftChanges;
use crate::domain::services::reservation_form::ReservationForm;
use crate::error::AppError;
use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn};

async fn form_view(form_id: &str, form: &ReservationForm) -> Result<FormResponse, AppError> {
    let settings = form.settings();
    Ok(FormResponse {
        form_id: form_id.to_string(),
        draft: form.draft().clone(),
        error_message: form.error_message(),
        min_date: settings.min_date.format("%Y-%m-%d").to_string(),
        max_date: settings.max_date.format("%Y-%m-%d").to_string(),
        slots: slot_grid(form, form.draft().date).await?,
    })
}

pub async fn create_form(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let form_id = Uuid::new_v4().to_string();
    let form = state.new_form();
    let view = form_view(&form_id, &form).await?;

    state.forms.write().await.insert(form_id.clone(), form);
    info!("Form session opened: {}", form_id);
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let forms = state.forms.read().await;
    let form = forms.get(&form_id)
        .ok_or(AppError::NotFound("Form not found".into()))?;
    Ok(Json(form_view(&form_id, form).await?))
}

pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
    Json(payload): Json<UpdateDraftRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = payload.date.as_deref().map(parse_date).transpose()?;

    let mut forms = state.forms.write().await;
    let form = forms.get_mut(&form_id)
        .ok_or(AppError::NotFound("Form not found".into()))?;

    form.apply_changes(DraftChanges {
        date,
        time: payload.time,
        region: payload.region,
        party_size: payload.party_size,
        has_children: payload.has_children,
        smoking: payload.smoking,
    })?;

    Ok(Json(form_view(&form_id, form).await?))
}

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut forms = state.forms.write().await;
    let form = forms.get_mut(&form_id)
        .ok_or(AppError::NotFound("Form not found".into()))?;

    match form.on_submit().await? {
        Some(submission) => Ok(Json(SubmitResponse {
            form_id,
            reservation: submission.reservation,
            notification: submission.notification,
            draft: form.draft().clone(),
        })),
        None => {
            let err = form.error().cloned().map(AppError::from).unwrap_or(AppError::Internal);
            warn!("Form {} submission rejected: {}", form_id, err);
            Err(err)
        }
    }
}

pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.forms.write().await.remove(&form_id)
        .ok_or(AppError::NotFound("Form not found".into()))?;
    info!("Form session discarded: {}", form_id);
    Ok(Json(serde_json::json!({"status": "discarded"})))
}
