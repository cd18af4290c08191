//! webenv shopping server (port 1207).

#![cfg_attr(not(test), forbid(unsafe_code))]

use webenv_core::server::{self, SentrySettings};
use webenv_shopping::config::ShopConfig;
use webenv_shopping::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (needed for Sentry init)
    let config = ShopConfig::from_env()?;

    let _sentry_guard = server::init_telemetry(
        "webenv_shopping=info,tower_http=debug",
        SentrySettings {
            dsn: config.sentry_dsn.clone(),
            environment: config.sentry_environment.clone(),
            release: sentry::release_name!(),
        },
    );

    let addr = config.socket_addr();
    let state = AppState::load(config)?;
    let app = server::with_sentry(webenv_shopping::app(state));

    server::serve(addr, app).await?;
    Ok(())
}
