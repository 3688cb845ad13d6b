use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;
use validator::Validate;

use super::{
  model::{ContactResponse, ContactSubmission},
  notifier::{ContactNotification, Notifier},
};

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  InternalServerError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, submission: ContactSubmission) -> Result<ContactResponse, ContactServiceError>;
}

pub struct ContactServiceImpl {
  notifier: Arc<dyn Notifier>,
}

impl ContactServiceImpl {
  pub fn new(notifier: Arc<dyn Notifier>) -> Self {
    Self { notifier }
  }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
  async fn submit(&self, submission: ContactSubmission) -> Result<ContactResponse, ContactServiceError> {
    submission
      .validate()
      .map_err(|e| ContactServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    tracing::info!(
      name = %submission.name,
      email = %submission.email,
      reason = %submission.reason,
      "Contact form submission received"
    );
    tracing::debug!(body = %submission.message, "Contact form message");

    // Run the notification on its own task so a panic while sending is
    // reported as an internal error for this request only.
    let notifier = Arc::clone(&self.notifier);
    let notification = ContactNotification::from(submission);
    let report = tokio::spawn(async move { notifier.send(notification).await })
      .await
      .map_err(|e| ContactServiceError::InternalServerError(format!("Notification task failed: {}", e)))?;

    if report.delivered {
      tracing::info!("Email notification sent successfully");
    } else {
      tracing::warn!(
        error = report.error.as_deref().unwrap_or("unknown"),
        "Email notification failed, submission still accepted"
      );
    }

    Ok(ContactResponse::received(report.delivered))
  }
}
