//! HTTP surface of the fraud inference API

pub mod error;
pub mod handlers;

use crate::feature_extractor::FeatureExtractor;
use crate::metrics::ApiMetrics;
use crate::models::Classifier;
use actix_cors::Cors;
use actix_web::{http::header, web};
use std::sync::Arc;

pub use error::ApiError;

/// Shared, read-only per-process state injected into every handler.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub extractor: FeatureExtractor,
    pub metrics: Arc<ApiMetrics>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, metrics: Arc<ApiMetrics>) -> Self {
        Self {
            classifier,
            extractor: FeatureExtractor::new(),
            metrics,
        }
    }
}

/// Permissive CORS: wildcard origin, `POST, GET, OPTIONS`, `Content-Type`.
/// Preflight requests get an empty 200 from the middleware.
pub fn cors() -> Cors {
    Cors::default()
        .send_wildcard()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
}

/// Register the `/predict` resource: GET health check, POST batch predict,
/// everything else 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/predict")
            .route(web::get().to(handlers::health))
            .route(web::post().to(handlers::predict))
            .default_service(web::route().to(handlers::method_not_allowed)),
    );
}
