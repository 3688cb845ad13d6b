use serde::{Deserialize, Serialize};
use validator::Validate;

pub const RECEIVED_MESSAGE: &str = "Your message has been received. I'll get back to you soon!";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
  #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
  pub name: String,
  #[validate(email(message = "email must be a valid email address"))]
  pub email: String,
  #[validate(length(min = 1, message = "reason is required"))]
  pub reason: String,
  #[validate(length(min = 1, max = 2000, message = "message must be between 1 and 2000 characters"))]
  pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactResponse {
  pub success: bool,
  pub message: String,
  pub email_sent: bool,
}

impl ContactResponse {
  pub fn received(email_sent: bool) -> Self {
    Self {
      success: true,
      message: RECEIVED_MESSAGE.to_string(),
      email_sent,
    }
  }
}

/// Display text for a reason code; unknown codes are shown as given.
pub fn reason_label(reason: &str) -> &str {
  match reason {
    "collab" => "Collaboration / Offer",
    "question" => "Question",
    "other" => "Other",
    other => other,
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceDescriptor {
  pub service: String,
  pub status: String,
  pub version: String,
  pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Endpoints {
  pub health: String,
  pub contact: String,
}

impl ServiceDescriptor {
  pub fn current() -> Self {
    Self {
      service: "Shabnam Portfolio API".to_string(),
      status: "running".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
      endpoints: Endpoints {
        health: "/health".to_string(),
        contact: "/contact (POST)".to_string(),
      },
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
  pub status: String,
  pub service: String,
}

impl HealthResponse {
  pub fn ok() -> Self {
    Self {
      status: "ok".to_string(),
      service: "portfolio-api".to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn submission() -> ContactSubmission {
    ContactSubmission {
      name: "Ada Lovelace".to_string(),
      email: "ada@example.com".to_string(),
      reason: "collab".to_string(),
      message: "Let's build something.".to_string(),
    }
  }

  #[test]
  fn test_reason_labels() {
    assert_eq!(reason_label("collab"), "Collaboration / Offer");
    assert_eq!(reason_label("question"), "Question");
    assert_eq!(reason_label("other"), "Other");
    assert_eq!(reason_label("xyz"), "xyz");
  }

  #[test]
  fn test_valid_submission_passes() {
    assert!(submission().validate().is_ok());
  }

  #[test]
  fn test_empty_name_is_rejected() {
    let mut payload = submission();
    payload.name = String::new();
    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("name"));
  }

  #[test]
  fn test_name_over_100_chars_is_rejected() {
    let mut payload = submission();
    payload.name = "n".repeat(101);
    assert!(payload.validate().is_err());

    payload.name = "n".repeat(100);
    assert!(payload.validate().is_ok());
  }

  #[test]
  fn test_message_length_bounds() {
    let mut payload = submission();
    payload.message = "m".repeat(2000);
    assert!(payload.validate().is_ok());

    payload.message = "m".repeat(2001);
    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("message"));

    payload.message = String::new();
    assert!(payload.validate().is_err());
  }

  #[test]
  fn test_length_is_counted_in_characters() {
    let mut payload = submission();
    payload.message = "é".repeat(2000);
    assert!(payload.validate().is_ok());
  }

  #[test]
  fn test_invalid_email_is_rejected() {
    let mut payload = submission();
    payload.email = "not-an-email".to_string();
    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("email"));
  }

  #[test]
  fn test_empty_reason_is_rejected() {
    let mut payload = submission();
    payload.reason = String::new();
    assert!(payload.validate().is_err());
  }

  #[test]
  fn test_received_response() {
    let response = ContactResponse::received(false);
    assert!(response.success);
    assert!(!response.email_sent);
    assert_eq!(response.message, RECEIVED_MESSAGE);
  }
}
