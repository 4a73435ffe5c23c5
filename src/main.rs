mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::install_tracing();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    let db = startup::connect_to_database(&config)
        .await
        .inspect_err(|e| tracing::error!("Failed to prepare database: {}", e))?;

    tracing::info!("Database ready");

    let http_client = startup::setup_reqwest_client()
        .inspect_err(|e| tracing::error!("Failed to build HTTP client: {}", e))?;

    if let Err(e) = bot::start::start_bot(&config, db, http_client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    tracing::info!("Discord bot shut down");

    Ok(())
}
