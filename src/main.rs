// src/main.rs

use gitops_api::{
    config::Config,
    startup::{shutdown_signal, Server},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    init_tracing("info,tower_http=debug");

    // PORT / NODE_ENV / APP_VERSION, read once
    let config = Config::from_env()?;

    let server = Server::bind(config).await?;
    server.run_until(shutdown_signal()).await?;
    Ok(())
}
