use std::sync::Arc;
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, error, info, warn};
use crate::domain::models::{
    notification::Notification,
    region::find_region,
    reservation::{ConfirmedReservation, DraftChanges, DraftStatus, ReservationDraft},
};
use crate::domain::ports::{NotificationService, ReservationRepository, SlotIndexRepository};
use crate::domain::services::availability::generate_time_slots;
use crate::error::{AppError, FormError};

#[derive(Debug, Clone)]
pub struct FormSettings {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub slot_interval_min: u32,
    pub notification_duration_ms: u64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            min_date: NaiveDate::from_ymd_opt(2024, 7, 24).unwrap_or_default(),
            max_date: NaiveDate::from_ymd_opt(2024, 7, 31).unwrap_or_default(),
            opening_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            closing_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
            slot_interval_min: 30,
            notification_duration_ms: 3000,
        }
    }
}

/// What a successful submission hands back to the presentation layer.
#[derive(Debug, Clone)]
pub struct Submission {
    pub reservation: ConfirmedReservation,
    pub notification: Notification,
}

/// Controller behind one reservation form: owns the draft, knows the slot
/// grid and the region rules, and turns a valid draft into a reservation.
///
/// Validation problems never fail an operation. They land in the single
/// error field read through [`ReservationForm::error_message`].
pub struct ReservationForm {
    settings: FormSettings,
    registry: Arc<dyn ReservationRepository>,
    slot_index: Arc<dyn SlotIndexRepository>,
    notifier: Arc<dyn NotificationService>,
    time_slots: Vec<String>,
    draft: ReservationDraft,
    error: Option<FormError>,
}

impl ReservationForm {
    pub fn new(
        settings: FormSettings,
        registry: Arc<dyn ReservationRepository>,
        slot_index: Arc<dyn SlotIndexRepository>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        let mut form = Self {
            settings,
            registry,
            slot_index,
            notifier,
            time_slots: Vec::new(),
            draft: ReservationDraft::default(),
            error: None,
        };
        form.generate_time_slots();
        form
    }

    pub fn generate_time_slots(&mut self) -> &[String] {
        self.time_slots = generate_time_slots(
            self.settings.opening_time,
            self.settings.closing_time,
            self.settings.slot_interval_min,
        );
        debug!("Generated time slots: {:?}", self.time_slots);
        &self.time_slots
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Empty string means no error.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub async fn get_unavailable_slots_for_date(&self, date: Option<NaiveDate>) -> Result<Vec<String>, AppError> {
        match date {
            Some(date) => self.slot_index.unavailable_for(date).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn get_available_slots_count(&self, date: Option<NaiveDate>) -> Result<usize, AppError> {
        let unavailable = self.get_unavailable_slots_for_date(date).await?;
        Ok(self.time_slots.iter().filter(|slot| !unavailable.contains(*slot)).count())
    }

    pub async fn is_slot_unavailable(&self, date: Option<NaiveDate>, slot: &str) -> Result<bool, AppError> {
        let unavailable = self.get_unavailable_slots_for_date(date).await?;
        Ok(unavailable.iter().any(|s| s == slot))
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), FormError> {
        if date < self.settings.min_date || date > self.settings.max_date {
            return Err(FormError::DateOutOfRange {
                min: self.settings.min_date,
                max: self.settings.max_date,
            });
        }
        Ok(())
    }

    fn check_time(&self, slot: &str) -> Result<(), FormError> {
        if !self.time_slots.iter().any(|s| s == slot) {
            return Err(FormError::UnknownSlot(slot.to_string()));
        }
        Ok(())
    }

    fn check_party_size(party_size: u32) -> Result<(), FormError> {
        if party_size == 0 {
            return Err(FormError::InvalidPartySize);
        }
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), FormError> {
        self.check_date(date)?;
        self.draft.date = Some(date);
        Ok(())
    }

    pub fn set_time(&mut self, slot: &str) -> Result<(), FormError> {
        self.check_time(slot)?;
        self.draft.time = Some(slot.to_string());
        Ok(())
    }

    pub fn set_region(&mut self, name: &str) -> Result<(), FormError> {
        let region = find_region(name).ok_or_else(|| FormError::UnknownRegion(name.to_string()))?;
        self.draft.region = Some(region.name.to_string());
        self.on_region_change();
        Ok(())
    }

    pub fn set_party_size(&mut self, party_size: u32) -> Result<(), FormError> {
        Self::check_party_size(party_size)?;
        self.draft.party_size = Some(party_size);
        self.validate_constraints();
        Ok(())
    }

    /// Applies several field edits at once. Every present field is checked
    /// before any is written, so a rejected edit leaves the draft as it was.
    pub fn apply_changes(&mut self, changes: DraftChanges) -> Result<(), FormError> {
        if let Some(date) = changes.date {
            self.check_date(date)?;
        }
        if let Some(time) = changes.time.as_deref() {
            self.check_time(time)?;
        }
        let region = match changes.region.as_deref() {
            Some(name) => Some(find_region(name).ok_or_else(|| FormError::UnknownRegion(name.to_string()))?),
            None => None,
        };
        if let Some(party_size) = changes.party_size {
            Self::check_party_size(party_size)?;
        }

        if changes.date.is_some() {
            self.draft.date = changes.date;
        }
        if changes.time.is_some() {
            self.draft.time = changes.time;
        }
        if let Some(region) = region {
            self.draft.region = Some(region.name.to_string());
        }
        if changes.party_size.is_some() {
            self.draft.party_size = changes.party_size;
        }
        if let Some(has_children) = changes.has_children {
            self.draft.has_children = has_children;
        }
        if let Some(smoking) = changes.smoking {
            self.draft.smoking = smoking;
        }

        if region.is_some() {
            self.on_region_change();
        } else if changes.party_size.is_some() || changes.has_children.is_some() || changes.smoking.is_some() {
            self.validate_constraints();
        }
        Ok(())
    }

    pub fn set_has_children(&mut self, has_children: bool) {
        self.draft.has_children = has_children;
        self.validate_constraints();
    }

    pub fn set_smoking(&mut self, smoking: bool) {
        self.draft.smoking = smoking;
        self.validate_constraints();
    }

    pub fn on_region_change(&mut self) {
        self.validate_constraints();
    }

    /// Runs the selected region's rules over the draft. Without a known
    /// region nothing is checked and the error is left as it was.
    pub fn validate_constraints(&mut self) {
        match self.draft.check_region_rules() {
            None => {}
            Some(Ok(())) => self.error = None,
            Some(Err(e)) => {
                debug!("Draft violates region rule: {}", e);
                self.error = Some(e);
            }
        }
    }

    /// Discards the draft without submitting it.
    pub fn reset(&mut self) {
        self.draft = ReservationDraft::default();
        self.error = None;
    }

    /// Returns `Ok(None)` when the draft was rejected; the reason is in the
    /// error field and the draft is left untouched.
    pub async fn on_submit(&mut self) -> Result<Option<Submission>, AppError> {
        let Some(key) = self.draft.slot_key() else {
            warn!("Submission rejected: missing {:?}", self.draft.missing_fields());
            self.error = Some(FormError::MissingSlot);
            return Ok(None);
        };

        if !self.registry.check_availability(&key).await? {
            warn!("Submission rejected: {} {} in {} already taken", key.date, key.time, key.region);
            self.error = Some(FormError::SlotUnavailable);
            return Ok(None);
        }

        let reservation = match self.draft.classify() {
            DraftStatus::Ready(reservation) => reservation,
            DraftStatus::Invalid(e) => {
                warn!("Submission rejected: {}", e);
                self.error = Some(e);
                return Ok(None);
            }
            DraftStatus::Incomplete(missing) => {
                warn!("Submission rejected: missing {:?}", missing);
                self.error = Some(FormError::from_missing(&missing));
                return Ok(None);
            }
        };

        if !self.registry.reserve_if_available(&reservation).await? {
            warn!("Submission rejected: {} {} in {} taken concurrently", key.date, key.time, key.region);
            self.error = Some(FormError::SlotUnavailable);
            return Ok(None);
        }

        self.slot_index.mark_unavailable(reservation.date, &reservation.time).await?;

        let notification = Notification::reservation_confirmed(self.settings.notification_duration_ms);
        if let Err(e) = self.notifier.notify(&notification).await {
            error!("Failed to emit confirmation for {}: {:?}", reservation.id, e);
        }

        info!(
            "Reservation confirmed: {} ({} {} in {}, party of {})",
            reservation.id, reservation.date, reservation.time, reservation.region, reservation.party_size
        );

        self.reset();
        Ok(Some(Submission { reservation, notification }))
    }
}
