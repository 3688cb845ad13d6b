use crate::email::types::{EmailMessage, SendGridPayload};
use anyhow::Result;
use reqwest::Client;

/// Client for the SendGrid v3 mail-send endpoint.
#[derive(Clone)]
pub struct EmailService {
  client: Client,
  api_key: String,
  api_url: String,
  from_email: String,
}

impl EmailService {
  pub fn new(api_key: String, api_url: String, from_email: String) -> Result<Self> {
    let client = Client::builder().build()?;

    Ok(EmailService {
      client,
      api_key,
      api_url: api_url.trim_end_matches('/').to_string(),
      from_email,
    })
  }

  pub fn from_email(&self) -> &str {
    &self.from_email
  }

  /// Submits the message and returns the provider's HTTP status code.
  /// Non-success statuses are returned, not turned into errors; only
  /// transport failures are.
  pub async fn send_email(&self, message: &EmailMessage) -> Result<u16> {
    let payload = SendGridPayload::new(&self.from_email, message);

    let response = self
      .client
      .post(format!("{}/v3/mail/send", self.api_url))
      .bearer_auth(&self.api_key)
      .json(&payload)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      tracing::debug!(status = status.as_u16(), body = %body, "SendGrid rejected message");
    }

    Ok(status.as_u16())
  }
}
