use std::time::Duration;

use adapter::http::HttpClient;
use anyhow::{Context, Result};
use app::notice::NoticeSink;
use app::refresh::RefreshService;
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let http = HttpClient::new(&app_config.api)?;
    let registry = AppRegistry::new(http);

    registry
        .health_client()
        .check()
        .await
        .context("backend health check failed")?;
    tracing::info!(
        "connected to the reservation backend at {}",
        app_config.api.base_url
    );

    let notices = NoticeSink::default();
    let refresh = RefreshService::new(
        registry,
        Duration::from_secs(app_config.refresh.interval_secs),
        notices,
    );
    // Periodic full reload keeps every operator's view converging on the
    // backend; there is no finer-grained synchronization.
    refresh.run().await;
    Ok(())
}
