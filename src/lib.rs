//! Fraud Inference API Library
//!
//! A minimal fraud-detection inference endpoint: deterministic feature-vector
//! construction from loosely-structured transaction records, batch prediction
//! against a pre-trained ONNX classifier, and a health-check/predict
//! dual-mode HTTP contract.

pub mod api;
pub mod config;
pub mod feature_extractor;
pub mod metrics;
pub mod models;
pub mod types;

pub use api::{ApiError, AppState};
pub use config::AppConfig;
pub use feature_extractor::{FeatureExtractor, FEATURE_COUNT, FEATURE_ORDER};
pub use metrics::ApiMetrics;
pub use models::{Classifier, FraudClassifier};
pub use types::{HealthResponse, PredictResponse, TransactionRecord};
