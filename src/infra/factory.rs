use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::SlotIndexRepository;
use crate::infra::notification::log_notification_service::LogNotificationService;
use crate::infra::repositories::{
    in_memory_reservation_repo::InMemoryReservationRepo,
    in_memory_slot_index_repo::InMemorySlotIndexRepo,
};

pub fn bootstrap_state(config: &Config) -> AppState {
    let slot_index_repo: Arc<dyn SlotIndexRepository> = if config.seed_sample_slots {
        info!("Seeding slot index with sample unavailable slots");
        Arc::new(InMemorySlotIndexRepo::with_sample_data())
    } else {
        Arc::new(InMemorySlotIndexRepo::new())
    };

    info!(
        "Booking window {} .. {}, slots {} - {} every {} min",
        config.booking_window_start,
        config.booking_window_end,
        config.opening_time.format("%H:%M"),
        config.closing_time.format("%H:%M"),
        config.slot_interval_min
    );

    AppState {
        config: config.clone(),
        reservation_repo: Arc::new(InMemoryReservationRepo::new()),
        slot_index_repo,
        notification_service: Arc::new(LogNotificationService),
        forms: Arc::new(RwLock::new(HashMap::new())),
    }
}
