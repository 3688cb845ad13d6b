use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FROM_EMAIL, DEFAULT_NOTIFICATION_EMAIL, DEFAULT_SENDGRID_API_URL};

#[derive(Debug, Clone, Deserialize)]
pub struct SendGridConfig {
  pub api_key: Option<String>,
  pub api_url: String,
  pub from_email: String,
  pub notification_email: String,
}

impl Default for SendGridConfig {
  fn default() -> Self {
    SendGridConfig {
      api_key: None,
      api_url: DEFAULT_SENDGRID_API_URL.to_string(),
      from_email: DEFAULT_FROM_EMAIL.to_string(),
      notification_email: DEFAULT_NOTIFICATION_EMAIL.to_string(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: String,
  pub reply_to: String,
  pub subject: String,
  pub html_body: String,
  pub text_body: String,
}

impl EmailMessage {
  pub fn new(to: String, reply_to: String, subject: String, html_body: String, text_body: String) -> Self {
    EmailMessage {
      to,
      reply_to,
      subject,
      html_body,
      text_body,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
  Delivered,
  Rejected(String),
}

/// Maps a provider response status to a delivery outcome. Only 200, 201 and
/// 202 count as accepted.
pub fn classify_delivery_status(code: u16) -> DeliveryStatus {
  match code {
    200..=202 => DeliveryStatus::Delivered,
    other => DeliveryStatus::Rejected(format!("provider returned status {}", other)),
  }
}

/// Wire format of the SendGrid v3 `mail/send` request.
#[derive(Debug, Serialize)]
pub(crate) struct SendGridPayload<'a> {
  pub personalizations: Vec<Personalization<'a>>,
  pub from: EmailAddress<'a>,
  pub reply_to: EmailAddress<'a>,
  pub subject: &'a str,
  pub content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Personalization<'a> {
  pub to: Vec<EmailAddress<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailAddress<'a> {
  pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
  #[serde(rename = "type")]
  pub content_type: &'a str,
  pub value: &'a str,
}

impl<'a> SendGridPayload<'a> {
  pub fn new(from: &'a str, message: &'a EmailMessage) -> Self {
    SendGridPayload {
      personalizations: vec![Personalization {
        to: vec![EmailAddress { email: &message.to }],
      }],
      from: EmailAddress { email: from },
      reply_to: EmailAddress {
        email: &message.reply_to,
      },
      subject: &message.subject,
      // SendGrid requires text/plain to precede text/html.
      content: vec![
        Content {
          content_type: "text/plain",
          value: &message.text_body,
        },
        Content {
          content_type: "text/html",
          value: &message.html_body,
        },
      ],
    }
  }
}
