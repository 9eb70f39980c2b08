use chrono::{NaiveTime, Timelike};

const TOTAL_MINUTES: u32 = 1440;

/// Half-open `[opening, closing)` sequence of `HH:MM` labels, one every
/// `interval_min` minutes.
pub fn generate_time_slots(opening: NaiveTime, closing: NaiveTime, interval_min: u32) -> Vec<String> {
    if interval_min == 0 {
        return Vec::new();
    }

    let start_idx = opening.hour() * 60 + opening.minute();
    let end_idx = (closing.hour() * 60 + closing.minute()).min(TOTAL_MINUTES);

    let mut slots = Vec::new();
    let mut cursor = start_idx;
    while cursor < end_idx {
        if let Some(nt) = NaiveTime::from_hms_opt(cursor / 60, cursor % 60, 0) {
            slots.push(nt.format("%H:%M").to_string());
        }
        cursor += interval_min;
    }
    slots
}
