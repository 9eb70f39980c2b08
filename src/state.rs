use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::domain::ports::{NotificationService, ReservationRepository, SlotIndexRepository};
use crate::domain::services::reservation_form::ReservationForm;
use crate::config::Config;

/// Open form sessions by id. Every form operation holds the write lock, so
/// operations touching the shared registry run one at a time.
pub type FormSessions = Arc<RwLock<HashMap<String, ReservationForm>>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub slot_index_repo: Arc<dyn SlotIndexRepository>,
    pub notification_service: Arc<dyn NotificationService>,
    pub forms: FormSessions,
}

impl AppState {
    pub fn new_form(&self) -> ReservationForm {
        ReservationForm::new(
            self.config.form_settings(),
            self.reservation_repo.clone(),
            self.slot_index_repo.clone(),
            self.notification_service.clone(),
        )
    }
}
