use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your message. Please try again later.";

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn unprocessable_entity(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!("Rejected contact payload: {}", rejection.body_text());
    AppError::unprocessable_entity(rejection.body_text())
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      ContactServiceError::ValidationError(msg) => AppError::unprocessable_entity(msg),
      ContactServiceError::InternalServerError(msg) => {
        tracing::error!("Error processing contact message: {}", msg);
        AppError::internal_server_error(INTERNAL_ERROR_MESSAGE)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domains::contact::service::ContactServiceError;

  #[test]
  fn test_validation_error_maps_to_422() {
    let err = AppError::from(ContactServiceError::ValidationError("name: too short".to_string()));
    assert_eq!(err.status_code, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.message, "name: too short");
  }

  #[test]
  fn test_internal_error_hides_details() {
    let err = AppError::from(ContactServiceError::InternalServerError("task panicked at notifier.rs".to_string()));
    assert_eq!(StatusCode::from(err), StatusCode::INTERNAL_SERVER_ERROR);

    let err = AppError::from(ContactServiceError::InternalServerError("secret detail".to_string()));
    assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
  }
}
