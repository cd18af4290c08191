//! webenv home server (port 1220).

#![cfg_attr(not(test), forbid(unsafe_code))]

use webenv_core::server::{self, SentrySettings};
use webenv_home::config::HomeConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = HomeConfig::from_env()?;

    let _sentry_guard = server::init_telemetry(
        "webenv_home=info,tower_http=debug",
        SentrySettings {
            dsn: config.sentry_dsn.clone(),
            environment: config.sentry_environment.clone(),
            release: sentry::release_name!(),
        },
    );

    let addr = config.socket_addr();
    let app = server::with_sentry(webenv_home::app(config));

    server::serve(addr, app).await?;
    Ok(())
}
