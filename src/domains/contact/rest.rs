use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{ContactResponse, ContactSubmission};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(contact_handler))
}

pub async fn contact_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  let Json(submission) = payload?;

  state
    .submit_contact(submission)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}
