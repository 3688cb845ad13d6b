use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  domains::contact::notifier::{ContactNotification, DeliveryReport, Notifier},
  state::SharedAppState,
};

/// Notifier that records every notification and answers with a fixed report.
pub struct RecordingNotifier {
  report: DeliveryReport,
  sent: Mutex<Vec<ContactNotification>>,
}

impl RecordingNotifier {
  pub fn new(report: DeliveryReport) -> Self {
    Self {
      report,
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn sent(&self) -> Vec<ContactNotification> {
    self.sent.lock().expect("notifier lock").clone()
  }
}

#[async_trait]
impl Notifier for RecordingNotifier {
  async fn send(&self, notification: ContactNotification) -> DeliveryReport {
    self.sent.lock().expect("notifier lock").push(notification);
    self.report.clone()
  }
}

pub struct PanickingNotifier;

#[async_trait]
impl Notifier for PanickingNotifier {
  async fn send(&self, _notification: ContactNotification) -> DeliveryReport {
    panic!("notifier exploded");
  }
}

pub fn app_with_notifier(notifier: Arc<dyn Notifier>) -> Router {
  let state = SharedAppState::with_notifier(notifier);
  create_app(state, &AppConfig::default())
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, post_request(uri, Body::from(body))).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  send(app, post_request(uri, Body::from(body))).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}

fn post_request(uri: &str, body: Body) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body)
    .expect("build request")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
