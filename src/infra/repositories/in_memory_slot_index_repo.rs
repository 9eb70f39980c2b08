use crate::domain::ports::SlotIndexRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Slots shown as taken before any reservation is made.
pub const SAMPLE_UNAVAILABLE_SLOTS: [(&str, &[&str]); 3] = [
    ("2024-07-24", &["18:00", "18:30"]),
    ("2024-07-25", &["19:30", "20:00"]),
    ("2024-07-26", &["20:30"]),
];

#[derive(Default)]
pub struct InMemorySlotIndexRepo {
    slots_by_date: RwLock<HashMap<NaiveDate, Vec<String>>>,
}

impl InMemorySlotIndexRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data() -> Self {
        let slots_by_date = SAMPLE_UNAVAILABLE_SLOTS
            .iter()
            .filter_map(|(date, slots)| {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
                Some((date, slots.iter().map(|s| s.to_string()).collect()))
            })
            .collect();

        Self { slots_by_date: RwLock::new(slots_by_date) }
    }
}

#[async_trait]
impl SlotIndexRepository for InMemorySlotIndexRepo {
    async fn unavailable_for(&self, date: NaiveDate) -> Result<Vec<String>, AppError> {
        Ok(self.slots_by_date.read().await.get(&date).cloned().unwrap_or_default())
    }
    async fn mark_unavailable(&self, date: NaiveDate, slot: &str) -> Result<(), AppError> {
        let mut slots_by_date = self.slots_by_date.write().await;
        let slots = slots_by_date.entry(date).or_default();
        if !slots.iter().any(|s| s == slot) {
            slots.push(slot.to_string());
        }
        Ok(())
    }
}
