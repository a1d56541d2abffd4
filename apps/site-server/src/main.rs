//! # Leumas Site Server
//!
//! The main entry point for the Actix-web HTTP server: HTML pages, the REST
//! API, the contact and newsletter forms and the CV download.

use std::time::Duration;

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod presenters;
mod render;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

/// How often idle rate-limit entries are dropped.
const LIMITER_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Leumas site server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;

    let limiters = state.limiters.clone();
    actix_rt::spawn(async move {
        let mut interval = actix_rt::time::interval(LIMITER_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            limiters.retain_recent();
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(|cfg| handlers::configure_routes(cfg, &state))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
