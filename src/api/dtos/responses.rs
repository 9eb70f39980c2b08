use serde::Serialize;
use crate::domain::models::{
    notification::Notification,
    reservation::{ConfirmedReservation, ReservationDraft},
};

#[derive(Serialize)]
pub struct SlotView {
    pub time: String,
    pub unavailable: bool,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: Option<String>,
    pub slots: Vec<SlotView>,
    pub available_count: usize,
}

#[derive(Serialize)]
pub struct FormResponse {
    pub form_id: String,
    pub draft: ReservationDraft,
    pub error_message: String,
    pub min_date: String,
    pub max_date: String,
    pub slots: SlotsResponse,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub form_id: String,
    pub reservation: ConfirmedReservation,
    pub notification: Notification,
    pub draft: ReservationDraft,
}
