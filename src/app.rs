use axum::{http::HeaderValue, response::Json as JsonResponse, routing::get, Router};
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  config::AppConfig,
  domains::contact::{
    model::{HealthResponse, ServiceDescriptor},
    rest::contact_routes,
  },
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState, config: &AppConfig) -> Router {
  Router::new()
    .route("/", get(root_handler))
    .route("/health", get(health_handler))
    .merge(contact_routes())
    .with_state(state)
    .layer(cors_layer(&config.allowed_origins))
    .layer(TraceLayer::new_for_http())
}

pub async fn root_handler() -> JsonResponse<ServiceDescriptor> {
  JsonResponse(ServiceDescriptor::current())
}

pub async fn health_handler() -> JsonResponse<HealthResponse> {
  JsonResponse(HealthResponse::ok())
}

/// Credentialed CORS restricted to `origins`; method and header requests are
/// mirrored back since wildcards are not allowed alongside credentials. A `*`
/// entry echoes any request origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let allow_origin = if origins.iter().any(|origin| origin == "*") {
    AllowOrigin::mirror_request()
  } else {
    AllowOrigin::list(parse_origins(origins))
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_credentials(true)
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
  origins
    .iter()
    .filter_map(|origin| match HeaderValue::from_str(origin) {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
        None
      }
    })
    .collect()
}
