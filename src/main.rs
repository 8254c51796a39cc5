use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gradebook_engine::api::{AppState, create_router};
use gradebook_engine::config::ConfigLoader;

const CONFIG_DIR_ENV: &str = "GRADEBOOK_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.config().server.bind_address.clone();

    info!(
        config_dir = %config_dir,
        default_policy = ?config.config().grading.default_policy,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Gradebook engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
