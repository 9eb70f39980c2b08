use table_reservation_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        in_memory_reservation_repo::InMemoryReservationRepo,
        in_memory_slot_index_repo::InMemorySlotIndexRepo,
    },
    domain::{models::notification::Notification, ports::NotificationService},
    error::AppError,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use async_trait::async_trait;
use tower::ServiceExt;
use serde_json::Value;

#[derive(Default)]
pub struct MockNotificationService {
    pub sent: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn notify(&self, notification: &Notification) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub notifications: Arc<MockNotificationService>,
}

#[allow(dead_code)]
impl TestApp {
    /// Fresh registry and a slot index seeded with the sample data.
    pub async fn new() -> Self {
        Self::build(InMemorySlotIndexRepo::with_sample_data())
    }

    pub async fn without_sample_slots() -> Self {
        Self::build(InMemorySlotIndexRepo::new())
    }

    fn build(slot_index: InMemorySlotIndexRepo) -> Self {
        let notifications = Arc::new(MockNotificationService::default());

        let state = Arc::new(AppState {
            config: Config::default(),
            reservation_repo: Arc::new(InMemoryReservationRepo::new()),
            slot_index_repo: Arc::new(slot_index),
            notification_service: notifications.clone(),
            forms: Arc::new(RwLock::new(HashMap::new())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            state,
            notifications,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn open_form(&self) -> String {
        let res = self.request("POST", "/api/v1/forms", None).await;
        assert!(res.status().is_success(), "Opening a form failed: {}", res.status());
        let body = parse_body(res).await;
        body["form_id"].as_str().expect("No form_id in body").to_string()
    }

    pub async fn update_form(&self, form_id: &str, payload: Value) -> Response {
        self.request("PATCH", &format!("/api/v1/forms/{}", form_id), Some(payload)).await
    }

    pub async fn submit_form(&self, form_id: &str) -> Response {
        self.request("POST", &format!("/api/v1/forms/{}/submit", form_id), None).await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
