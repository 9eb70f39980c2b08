use crate::domain::{models::reservation::{ConfirmedReservation, SlotKey}, ports::ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryReservationRepo {
    reservations: RwLock<Vec<ConfirmedReservation>>,
}

impl InMemoryReservationRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepo {
    async fn check_availability(&self, candidate: &SlotKey) -> Result<bool, AppError> {
        let reservations = self.reservations.read().await;
        Ok(!reservations.iter().any(|r| r.occupies(candidate)))
    }
    async fn reserve(&self, reservation: &ConfirmedReservation) -> Result<ConfirmedReservation, AppError> {
        self.reservations.write().await.push(reservation.clone());
        Ok(reservation.clone())
    }
    async fn reserve_if_available(&self, reservation: &ConfirmedReservation) -> Result<bool, AppError> {
        let key = reservation.key();
        let mut reservations = self.reservations.write().await;
        if reservations.iter().any(|r| r.occupies(&key)) {
            return Ok(false);
        }
        reservations.push(reservation.clone());
        Ok(true)
    }
    async fn list(&self) -> Result<Vec<ConfirmedReservation>, AppError> {
        Ok(self.reservations.read().await.clone())
    }
}
