use std::env;

use lettre::Address;

use crate::email::SendGridConfig;

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
  "http://localhost:5500",
  "http://localhost:3000",
  "http://127.0.0.1:5500",
  "https://shabnamnazarli.ufazien.com",
];

pub const DEFAULT_NOTIFICATION_EMAIL: &str = "shabnamnezerli@gmail.com";
pub const DEFAULT_FROM_EMAIL: &str = "noreply@portfolio.com";
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub allowed_origins: Vec<String>,
  pub email: SendGridConfig,
}

#[derive(Debug)]
pub enum ConfigError {
  InvalidPort(String),
  InvalidAddress { variable: &'static str, value: String },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ConfigError::InvalidPort(value) => write!(f, "Invalid server port: {}", value),
      ConfigError::InvalidAddress { variable, value } => {
        write!(f, "{} is not a valid email address: {}", variable, value)
      }
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_port = match lookup("PORT") {
      Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidPort(port))?,
      None => 8000,
    };

    let from_email = lookup("SENDGRID_FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string());
    let notification_email = lookup("NOTIFICATION_EMAIL").unwrap_or_else(|| DEFAULT_NOTIFICATION_EMAIL.to_string());
    check_address("SENDGRID_FROM_EMAIL", &from_email)?;
    check_address("NOTIFICATION_EMAIL", &notification_email)?;

    Ok(AppConfig {
      server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
      server_port,
      allowed_origins: parse_allowed_origins(lookup("ALLOWED_ORIGINS").as_deref()),
      email: SendGridConfig {
        api_key: lookup("SENDGRID_API_KEY").filter(|key| !key.trim().is_empty()),
        api_url: lookup("SENDGRID_API_URL").unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
        from_email,
        notification_email,
      },
    })
  }

  pub fn server_addr(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      server_host: "0.0.0.0".to_string(),
      server_port: 8000,
      allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()).collect(),
      email: SendGridConfig::default(),
    }
  }
}

/// Splits a comma-separated origin list, falling back to the local
/// development origins when nothing usable is given.
pub fn parse_allowed_origins(raw: Option<&str>) -> Vec<String> {
  let origins: Vec<String> = raw
    .unwrap_or_default()
    .split(',')
    .map(str::trim)
    .filter(|origin| !origin.is_empty())
    .map(str::to_string)
    .collect();

  if origins.is_empty() {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()).collect()
  } else {
    origins
  }
}

fn check_address(variable: &'static str, value: &str) -> Result<(), ConfigError> {
  value.parse::<Address>().map(|_| ()).map_err(|_| ConfigError::InvalidAddress {
    variable,
    value: value.to_string(),
  })
}
