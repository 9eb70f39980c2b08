use crate::domain::{models::notification::Notification, ports::NotificationService};
use crate::error::AppError;
use async_trait::async_trait;
use tracing::info;

/// Emits notifications to the log. The HTTP response carries the same
/// notification for the client to display.
pub struct LogNotificationService;

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn notify(&self, notification: &Notification) -> Result<(), AppError> {
        info!(
            action = %notification.action,
            duration_ms = notification.duration_ms,
            "Notification: {}", notification.message
        );
        Ok(())
    }
}
