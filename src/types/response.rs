//! Response bodies for the prediction endpoint

use serde::{Deserialize, Serialize};

/// Successful batch prediction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// One integer label per input record, in input order
    pub predictions: Vec<i64>,
}

/// Health check response returned by `GET /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub endpoint: String,
    pub method: String,
    /// Label produced for an all-zero feature vector; exercises the full
    /// model invocation path, not just process liveness
    pub test_prediction: i64,
    pub note: String,
}

impl HealthResponse {
    pub fn healthy(test_prediction: i64) -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Fraud Detection API is running".to_string(),
            endpoint: "/predict".to_string(),
            method: "POST".to_string(),
            test_prediction,
            note: "Use POST with JSON body containing \"inputs\" array".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse::healthy(0);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["endpoint"], "/predict");
        assert_eq!(json["method"], "POST");
        assert_eq!(json["test_prediction"], 0);
    }

    #[test]
    fn test_predict_response_serialization() {
        let response = PredictResponse {
            predictions: vec![0, 1, 0],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"predictions":[0,1,0]}"#);
    }
}
