use crate::domain::models::{
    notification::Notification,
    reservation::{ConfirmedReservation, SlotKey},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// The registry of confirmed reservations. Append-only.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// True iff no confirmed reservation has exactly this date, time and region.
    async fn check_availability(&self, candidate: &SlotKey) -> Result<bool, AppError>;
    /// Appends without checking. Callers must check availability first.
    async fn reserve(&self, reservation: &ConfirmedReservation) -> Result<ConfirmedReservation, AppError>;
    /// Checks and appends as one step. Returns false and stores nothing when the slot is taken.
    async fn reserve_if_available(&self, reservation: &ConfirmedReservation) -> Result<bool, AppError>;
    async fn list(&self) -> Result<Vec<ConfirmedReservation>, AppError>;
}

/// Date-keyed set of taken slot labels, used to grey out the slot grid.
/// Marking a label already present for the date is a no-op.
#[async_trait]
pub trait SlotIndexRepository: Send + Sync {
    async fn unavailable_for(&self, date: NaiveDate) -> Result<Vec<String>, AppError>;
    async fn mark_unavailable(&self, date: NaiveDate, slot: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), AppError>;
}
