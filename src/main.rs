//! task-list - HTTP Server Entry Point
//!
//! Starts the HTTP server that serves the task list page and API.

use task_list::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_list=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: store={}, data_dir={}",
        config.store_type.as_str(),
        config.data_dir.display()
    );

    info!("Starting server on {}", config.addr());
    api::serve(config).await?;

    Ok(())
}
