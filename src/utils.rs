use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod error;

/// Installs the global subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();
}
