use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::contact::{
    model::{ContactResponse, ContactSubmission},
    notifier::{EmailNotifier, Notifier},
    service::{ContactService, ContactServiceError, ContactServiceImpl},
  },
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<ContactResponse, ContactServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<ContactServiceImpl>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
    let notifier = EmailNotifier::new(&config.email)?;
    tracing::info!(
      configured = notifier.is_configured(),
      recipient = %config.email.notification_email,
      "SendGrid notifications"
    );
    Ok(Self::with_notifier(Arc::new(notifier)))
  }

  pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(notifier));

    Self { contact_service }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, submission: ContactSubmission) -> Result<ContactResponse, ContactServiceError> {
    self.contact_service.submit(submission).await
  }
}
