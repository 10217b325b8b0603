use std::sync::{Arc, Mutex};

use anyhow::Result;
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
  email::{EmailMessage, Mailer},
  state::SharedAppState,
};

/// Records every submitted message instead of talking to SMTP.
#[derive(Default)]
pub struct RecordingMailer {
  pub sent: Mutex<Vec<EmailMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, message: &EmailMessage) -> Result<String> {
    self.sent.lock().expect("lock sent messages").push(message.clone());
    Ok("<test-message-id@localhost>".to_string())
  }
}

/// Fails every submission with a fixed transport error message.
pub struct FailingMailer {
  reason: String,
}

impl FailingMailer {
  pub fn new(reason: impl Into<String>) -> Self {
    Self { reason: reason.into() }
  }
}

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, _message: &EmailMessage) -> Result<String> {
    Err(anyhow::anyhow!("{}", self.reason))
  }
}

pub fn app_with_mailer(mailer: Arc<dyn Mailer>) -> Router {
  let state = SharedAppState::new(mailer);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
