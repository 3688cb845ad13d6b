use tokio::signal;

use dotenvy::dotenv;

use portfolio_contact_api::app::create_app;
use portfolio_contact_api::config::AppConfig;
use portfolio_contact_api::state::SharedAppState;
use portfolio_contact_api::utils::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  init_tracing();

  let config = AppConfig::from_env()?;

  tracing::info!("Portfolio Contact API starting");
  tracing::info!(origins = ?config.allowed_origins, "CORS origins");

  let app_state = SharedAppState::new(&config)?;
  let app = create_app(app_state, &config);

  let addr = config.server_addr();
  let listener = tokio::net::TcpListener::bind(&addr).await?;

  tracing::info!(address = %addr, "Server listening");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
