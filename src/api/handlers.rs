//! HTTP handlers for the `/predict` endpoint

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::feature_extractor::FEATURE_COUNT;
use crate::types::response::{HealthResponse, PredictResponse};
use crate::types::transaction::TransactionRecord;
use actix_web::{web, HttpResponse};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info};

/// `GET /predict` - liveness probe that also exercises the full model
/// invocation path, catching load-time corruption a bare "is the process
/// alive" check would miss.
pub async fn health(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let zeros = vec![vec![0.0_f32; FEATURE_COUNT]];

    let labels = state.classifier.predict(&zeros).map_err(|e| {
        error!(error = %e, "Health check failed");
        state.metrics.record_failure();
        ApiError::HealthCheckFailed(e.to_string())
    })?;

    let test_prediction = labels
        .first()
        .copied()
        .ok_or_else(|| ApiError::HealthCheckFailed("model returned no label".to_string()))?;

    state.metrics.record_health_check();
    debug!(test_prediction = test_prediction, "Health check passed");

    Ok(HttpResponse::Ok().json(HealthResponse::healthy(test_prediction)))
}

/// `POST /predict` - batch prediction.
///
/// The body is parsed by hand rather than through an extractor so the two
/// client-error cases stay distinguishable: broken JSON syntax (400 with a
/// parse message) versus valid JSON missing a non-empty `inputs` array
/// (400 with a worked example). Anything that fails after validation -
/// non-numeric feature values, model-internal errors - fails the whole
/// batch with a single 500.
pub async fn predict(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let started = Instant::now();

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        state.metrics.record_failure();
        ApiError::MalformedBody(e.to_string())
    })?;

    let inputs = value
        .get("inputs")
        .and_then(Value::as_array)
        .filter(|records| !records.is_empty())
        .ok_or_else(|| {
            state.metrics.record_failure();
            ApiError::MissingInputs
        })?;

    let records: Vec<TransactionRecord> = inputs
        .iter()
        .map(|record| serde_json::from_value(record.clone()))
        .collect::<Result<_, _>>()
        .map_err(|e| {
            state.metrics.record_failure();
            ApiError::PredictionFailed(e.to_string())
        })?;

    // One row per record, FEATURE_COUNT columns, input order preserved
    let matrix = state.extractor.extract_batch(&records);

    let predictions = state.classifier.predict(&matrix).map_err(|e| {
        error!(error = %e, batch_size = records.len(), "Batch inference failed");
        state.metrics.record_failure();
        ApiError::PredictionFailed(e.to_string())
    })?;

    let elapsed = started.elapsed();
    state.metrics.record_predict(elapsed, predictions.len());
    info!(
        batch_size = predictions.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "Batch prediction complete"
    );

    Ok(HttpResponse::Ok().json(PredictResponse { predictions }))
}

/// Any method other than GET/POST (and the CORS preflight) on `/predict`.
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
