use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::models::region::find_region;
use crate::error::FormError;

/// The in-progress reservation while the form is being filled in.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub region: Option<String>,
    pub party_size: Option<u32>,
    pub has_children: bool,
    pub smoking: bool,
}

/// Identity of a bookable slot. Two reservations collide when their keys are equal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time: String,
    pub region: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConfirmedReservation {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub region: String,
    pub party_size: u32,
    pub has_children: bool,
    pub smoking: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewReservationParams {
    pub date: NaiveDate,
    pub time: String,
    pub region: String,
    pub party_size: u32,
    pub has_children: bool,
    pub smoking: bool,
}

impl ConfirmedReservation {
    pub fn new(params: NewReservationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: params.date,
            time: params.time,
            region: params.region,
            party_size: params.party_size,
            has_children: params.has_children,
            smoking: params.smoking,
            created_at: Utc::now(),
        }
    }

    pub fn key(&self) -> SlotKey {
        SlotKey {
            date: self.date,
            time: self.time.clone(),
            region: self.region.clone(),
        }
    }

    pub fn occupies(&self, key: &SlotKey) -> bool {
        self.date == key.date && self.time == key.time && self.region == key.region
    }
}

/// A batch of field edits; `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct DraftChanges {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub region: Option<String>,
    pub party_size: Option<u32>,
    pub has_children: Option<bool>,
    pub smoking: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Time,
    Region,
    PartySize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftStatus {
    Incomplete(Vec<DraftField>),
    Invalid(FormError),
    Ready(ConfirmedReservation),
}

impl ReservationDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn slot_key(&self) -> Option<SlotKey> {
        Some(SlotKey {
            date: self.date?,
            time: self.time.clone()?,
            region: self.region.clone()?,
        })
    }

    /// `None` when no known region is selected, in which case nothing is checked.
    pub fn check_region_rules(&self) -> Option<Result<(), FormError>> {
        let region = self.region.as_deref().and_then(find_region)?;
        Some(region.check(self.party_size, self.has_children, self.smoking))
    }

    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push(DraftField::Date);
        }
        if self.time.is_none() {
            missing.push(DraftField::Time);
        }
        if self.region.as_deref().and_then(find_region).is_none() {
            missing.push(DraftField::Region);
        }
        if self.party_size.is_none() {
            missing.push(DraftField::PartySize);
        }
        missing
    }

    pub fn classify(&self) -> DraftStatus {
        let (Some(date), Some(time), Some(region), Some(party_size)) = (
            self.date,
            self.time.as_ref(),
            self.region.as_deref().and_then(find_region),
            self.party_size,
        ) else {
            return DraftStatus::Incomplete(self.missing_fields());
        };

        if let Err(e) = region.check(Some(party_size), self.has_children, self.smoking) {
            return DraftStatus::Invalid(e);
        }

        DraftStatus::Ready(ConfirmedReservation::new(NewReservationParams {
            date,
            time: time.clone(),
            region: region.name.to_string(),
            party_size,
            has_children: self.has_children,
            smoking: self.smoking,
        }))
    }
}

impl FormError {
    pub fn from_missing(missing: &[DraftField]) -> Self {
        if missing.iter().any(|f| *f != DraftField::PartySize) {
            FormError::MissingSlot
        } else {
            FormError::MissingPartySize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn complete_draft() -> ReservationDraft {
        ReservationDraft {
            date: Some(date("2024-07-27")),
            time: Some("19:00".into()),
            region: Some("Riverside".into()),
            party_size: Some(4),
            has_children: true,
            smoking: false,
        }
    }

    #[test]
    fn test_empty_draft() {
        let draft = ReservationDraft::default();
        assert!(draft.is_empty());
        assert!(draft.slot_key().is_none());
        assert!(draft.check_region_rules().is_none());
        assert_eq!(
            draft.classify(),
            DraftStatus::Incomplete(vec![DraftField::Date, DraftField::Time, DraftField::Region, DraftField::PartySize])
        );
    }

    #[test]
    fn test_ready_draft_snapshots_every_field() {
        let draft = complete_draft();
        let DraftStatus::Ready(reservation) = draft.classify() else {
            panic!("Expected a ready draft");
        };
        assert_eq!(reservation.date, date("2024-07-27"));
        assert_eq!(reservation.time, "19:00");
        assert_eq!(reservation.region, "Riverside");
        assert_eq!(reservation.party_size, 4);
        assert!(reservation.has_children);
        assert!(!reservation.smoking);
        assert_eq!(reservation.key(), draft.slot_key().unwrap());
    }

    #[test]
    fn test_invalid_draft_reports_first_rule() {
        let draft = ReservationDraft {
            region: Some("Bar".into()),
            party_size: Some(6),
            has_children: true,
            ..complete_draft()
        };
        assert_eq!(
            draft.classify(),
            DraftStatus::Invalid(FormError::PartyTooLarge { region: "Bar".into(), max: 4 })
        );
    }

    #[test]
    fn test_unknown_region_counts_as_missing() {
        let draft = ReservationDraft { region: Some("Rooftop".into()), ..complete_draft() };
        assert!(draft.check_region_rules().is_none());
        assert_eq!(draft.classify(), DraftStatus::Incomplete(vec![DraftField::Region]));
    }

    #[test]
    fn test_missing_field_messages() {
        assert_eq!(FormError::from_missing(&[DraftField::PartySize]), FormError::MissingPartySize);
        assert_eq!(FormError::from_missing(&[DraftField::Time, DraftField::PartySize]), FormError::MissingSlot);
    }

    #[test]
    fn test_occupies_requires_exact_triple() {
        let DraftStatus::Ready(reservation) = complete_draft().classify() else {
            panic!("Expected a ready draft");
        };
        let key = reservation.key();
        assert!(reservation.occupies(&key));
        assert!(!reservation.occupies(&SlotKey { time: "19:30".into(), ..key.clone() }));
        assert!(!reservation.occupies(&SlotKey { region: "Bar".into(), ..key.clone() }));
        assert!(!reservation.occupies(&SlotKey { date: date("2024-07-28"), ..key }));
    }
}
