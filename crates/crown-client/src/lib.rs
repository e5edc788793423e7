pub mod capabilities;
pub mod config;
pub mod error;
pub mod events;
pub mod lifetime;
pub mod screens;
pub mod seed;
pub mod shell;
pub mod state;

#[cfg(test)]
mod testing;

use tracing_subscriber::{fmt, EnvFilter};

pub use capabilities::Capabilities;
pub use config::{AppConfig, ArVariant};
pub use error::{ClientError, Result};
pub use events::Notice;
pub use lifetime::ScreenLifetime;
pub use shell::Shell;
pub use state::{AppState, Screen};

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default
/// filter. Calling this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("crown_client=debug,crown_store=info,warn"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting {}", crown_shared::constants::APP_NAME);
    }
}

/// Load configuration from the environment and open the app.
pub fn start(capabilities: Capabilities) -> Result<AppState> {
    init_tracing();
    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");
    AppState::open(config, capabilities)
}
