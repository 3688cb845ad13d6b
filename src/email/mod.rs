//! Outbound email delivery
//!
//! This module talks to SendGrid's v3 mail-send API over HTTP using reqwest
//! and classifies the provider's response status.

mod service;
mod types;

pub use service::EmailService;
pub use types::{classify_delivery_status, DeliveryStatus, EmailMessage, SendGridConfig};
