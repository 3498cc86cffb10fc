//! Fraud Inference API - Main Entry Point
//!
//! Loads the ONNX classifier once at startup and serves the `/predict`
//! endpoint: GET health check, POST batch predictions.

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use fraud_inference_api::{
    api, config::AppConfig, metrics::{ApiMetrics, MetricsReporter}, models::FraudClassifier,
};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fraud_inference_api=info".parse()?),
        )
        .init();

    info!("Starting Fraud Inference API");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        workers = config.server.workers,
        "Configuration loaded successfully"
    );

    // Load the model before binding; a missing or corrupt artifact must
    // kill the process here rather than surface per-request
    let classifier = Arc::new(FraudClassifier::load(&config)?);

    // Initialize metrics
    let metrics = Arc::new(ApiMetrics::new());

    // Start metrics reporter (prints summary every 30 seconds)
    let metrics_clone = metrics.clone();
    tokio::spawn(async move {
        let reporter = MetricsReporter::new(metrics_clone, 30);
        reporter.start().await;
    });

    let state = web::Data::new(api::AppState::new(classifier, metrics));

    info!(
        "Listening on {}:{}",
        config.server.host, config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(api::cors())
            .configure(api::configure)
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    info!("Fraud Inference API shutting down");

    Ok(())
}
