use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal server error")]
    Internal,
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
            AppError::Config(msg) | AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
            AppError::Io(e) => {
                error!("I/O error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Problems with a reservation draft. `Display` is the message shown to the
/// user in the form's error field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Max size for {region} is {max}")]
    PartyTooLarge { region: String, max: u32 },
    #[error("{region} does not allow children.")]
    ChildrenNotAllowed { region: String },
    #[error("{region} does not allow smoking.")]
    SmokingNotAllowed { region: String },
    #[error("This slot is no longer available. Please select another.")]
    SlotUnavailable,
    #[error("Please select a date, time and region.")]
    MissingSlot,
    #[error("Please enter a party size.")]
    MissingPartySize,
    #[error("Please choose a date between {min} and {max}.")]
    DateOutOfRange { min: NaiveDate, max: NaiveDate },
    #[error("{0} is not a bookable time slot.")]
    UnknownSlot(String),
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
    #[error("Party size must be at least 1.")]
    InvalidPartySize,
}

impl FormError {
    /// Rejections raised while a field is being set, before it reaches the draft.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            FormError::DateOutOfRange { .. }
                | FormError::UnknownSlot(_)
                | FormError::UnknownRegion(_)
                | FormError::InvalidPartySize
        )
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::SlotUnavailable => AppError::Conflict(err.to_string()),
            e if e.is_input_rejection() => AppError::Validation(e.to_string()),
            e => AppError::Unprocessable(e.to_string()),
        }
    }
}
