use actix_web::{web, HttpServer};
use anyhow::Context;
use std::time::Duration;

use wander_api::{build_state, create_app, telemetry};
use wander_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        email_provider = %config.email.provider,
        directory_provider = %config.directory.provider,
        "Starting Wander API server"
    );

    let state = web::Data::new(build_state(&config)?);
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
