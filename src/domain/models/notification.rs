use serde::Serialize;

pub const RESERVATION_CONFIRMED: &str = "Reservation confirmed!";
pub const DISMISS_ACTION: &str = "Close";

/// A transient message shown to the user for `duration_ms`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn reservation_confirmed(duration_ms: u64) -> Self {
        Self {
            message: RESERVATION_CONFIRMED.to_string(),
            action: DISMISS_ACTION.to_string(),
            duration_ms,
        }
    }
}
