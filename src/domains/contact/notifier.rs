use async_trait::async_trait;

use super::model::{reason_label, ContactSubmission};
use crate::email::{classify_delivery_status, DeliveryStatus, EmailMessage, EmailService, SendGridConfig};

pub const NOT_CONFIGURED: &str = "Email service not configured";

#[derive(Debug, Clone)]
pub struct ContactNotification {
  pub sender_name: String,
  pub sender_email: String,
  pub reason: String,
  pub message: String,
  pub recipient_email: Option<String>,
}

impl From<ContactSubmission> for ContactNotification {
  fn from(submission: ContactSubmission) -> Self {
    Self {
      sender_name: submission.name,
      sender_email: submission.email,
      reason: submission.reason,
      message: submission.message,
      recipient_email: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
  pub delivered: bool,
  pub error: Option<String>,
}

impl DeliveryReport {
  pub fn delivered() -> Self {
    Self {
      delivered: true,
      error: None,
    }
  }

  pub fn failed(error: impl Into<String>) -> Self {
    Self {
      delivered: false,
      error: Some(error.into()),
    }
  }
}

/// Turns a contact submission into an outbound notification. Implementations
/// report failures through the returned [`DeliveryReport`] and never error.
#[async_trait]
pub trait Notifier: Send + Sync {
  async fn send(&self, notification: ContactNotification) -> DeliveryReport;
}

pub struct EmailNotifier {
  email_service: Option<EmailService>,
  default_recipient: String,
}

impl EmailNotifier {
  pub fn new(config: &SendGridConfig) -> anyhow::Result<Self> {
    let email_service = config
      .api_key
      .as_ref()
      .map(|api_key| EmailService::new(api_key.clone(), config.api_url.clone(), config.from_email.clone()))
      .transpose()?;

    Ok(Self {
      email_service,
      default_recipient: config.notification_email.clone(),
    })
  }

  pub fn is_configured(&self) -> bool {
    self.email_service.is_some()
  }
}

#[async_trait]
impl Notifier for EmailNotifier {
  async fn send(&self, notification: ContactNotification) -> DeliveryReport {
    let Some(email_service) = &self.email_service else {
      tracing::warn!("SENDGRID_API_KEY not set, email notification skipped");
      return DeliveryReport::failed(NOT_CONFIGURED);
    };

    let recipient = notification
      .recipient_email
      .clone()
      .unwrap_or_else(|| self.default_recipient.clone());
    let message = build_notification_email(&notification, recipient);

    match email_service.send_email(&message).await {
      Ok(code) => match classify_delivery_status(code) {
        DeliveryStatus::Delivered => {
          tracing::info!(to = %message.to, from = %email_service.from_email(), "Email notification sent");
          DeliveryReport::delivered()
        }
        DeliveryStatus::Rejected(reason) => {
          tracing::warn!(status = code, "Failed to send email: {}", reason);
          DeliveryReport::failed(reason)
        }
      },
      Err(e) => {
        tracing::warn!(error = %e, "Error sending email");
        DeliveryReport::failed(e.to_string())
      }
    }
  }
}

pub fn build_notification_email(notification: &ContactNotification, recipient: String) -> EmailMessage {
  EmailMessage::new(
    recipient,
    notification.sender_email.clone(),
    format!("New Contact Form Submission from {}", notification.sender_name),
    render_html_body(notification),
    render_text_body(notification),
  )
}

pub fn render_html_body(notification: &ContactNotification) -> String {
  let name = escape_html(&notification.sender_name);
  let email = escape_html(&notification.sender_email);
  let reason = escape_html(reason_label(&notification.reason));
  let message = escape_html(&notification.message);

  format!(
    r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2 style="color: #7c3aed;">New Contact Form Submission</h2>

    <div style="background-color: #f9fafb; padding: 15px; border-radius: 8px; margin: 20px 0;">
      <p><strong>From:</strong> {name}</p>
      <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
      <p><strong>Reason:</strong> {reason}</p>
    </div>

    <div style="background-color: #ffffff; padding: 15px; border-left: 4px solid #7c3aed; margin: 20px 0;">
      <h3 style="margin-top: 0;">Message:</h3>
      <p style="white-space: pre-wrap;">{message}</p>
    </div>

    <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb; font-size: 12px; color: #6b7280;">
      <p>This is an automated notification from your portfolio contact form.</p>
      <p>Reply directly to: <a href="mailto:{email}">{email}</a></p>
    </div>
  </div>
</body>
</html>
"#
  )
}

pub fn render_text_body(notification: &ContactNotification) -> String {
  format!(
    "New Contact Form Submission\n\nFrom: {}\nEmail: {}\nReason: {}\n\nMessage:\n{}\n\n---\nThis is an automated notification from your portfolio contact form.\nReply directly to: {}\n",
    notification.sender_name,
    notification.sender_email,
    reason_label(&notification.reason),
    notification.message,
    notification.sender_email,
  )
}

fn escape_html(input: &str) -> String {
  let mut escaped = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#x27;"),
      c => escaped.push(c),
    }
  }
  escaped
}
