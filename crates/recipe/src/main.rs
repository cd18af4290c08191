//! webenv recipe server (port 1206).

#![cfg_attr(not(test), forbid(unsafe_code))]

use webenv_core::server::{self, SentrySettings};
use webenv_recipe::catalog::RecipeCatalog;
use webenv_recipe::config::RecipeConfig;
use webenv_recipe::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (needed for Sentry init)
    let config = RecipeConfig::from_env()?;

    let _sentry_guard = server::init_telemetry(
        "webenv_recipe=info,tower_http=debug",
        SentrySettings {
            dsn: config.sentry_dsn.clone(),
            environment: config.sentry_environment.clone(),
            release: sentry::release_name!(),
        },
    );

    let addr = config.socket_addr();
    let state = AppState::new(config, RecipeCatalog::new());

    // Serve immediately; the page reports loading until the task finishes
    let _loader = state.start_loading();

    let app = server::with_sentry(webenv_recipe::app(state));
    server::serve(addr, app).await?;
    Ok(())
}
