//! Feature extraction for fraud detection model inference.
//!
//! This module turns loosely-structured transaction records into the
//! fixed-order feature vectors the model was trained on.

use crate::types::transaction::TransactionRecord;

/// Number of features the model expects per transaction.
pub const FEATURE_COUNT: usize = 10;

/// Feature order used during model training. Immutable at runtime; the
/// column order of every inference matrix must match it exactly.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "amount",
    "time_of_day",
    "merchant_category",
    "distance_from_home",
    "distance_from_last_transaction",
    "ratio_to_median_purchase",
    "repeat_retailer",
    "used_chip",
    "used_pin",
    "online_order",
];

/// Feature extractor that transforms transaction records into model input
/// features.
///
/// Absent fields default to `0.0`; a partial record is never rejected for
/// missingness. Output length is always exactly [`FEATURE_COUNT`].
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract features from a transaction record, in training order.
    pub fn extract(&self, record: &TransactionRecord) -> Vec<f32> {
        let mut features = Vec::with_capacity(FEATURE_COUNT);

        features.push(record.amount.unwrap_or(0.0) as f32);
        features.push(record.time_of_day.unwrap_or(0.0) as f32);
        features.push(record.merchant_category.unwrap_or(0.0) as f32);
        features.push(record.distance_from_home.unwrap_or(0.0) as f32);
        features.push(record.distance_from_last_transaction.unwrap_or(0.0) as f32);
        features.push(record.ratio_to_median_purchase.unwrap_or(0.0) as f32);
        features.push(record.repeat_retailer.unwrap_or(0.0) as f32);
        features.push(record.used_chip.unwrap_or(0.0) as f32);
        features.push(record.used_pin.unwrap_or(0.0) as f32);
        features.push(record.online_order.unwrap_or(0.0) as f32);

        features
    }

    /// Extract a feature matrix from a batch of records, preserving order.
    pub fn extract_batch(&self, records: &[TransactionRecord]) -> Vec<Vec<f32>> {
        records.iter().map(|r| self.extract(r)).collect()
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names in training order.
    pub fn feature_names(&self) -> &'static [&'static str] {
        &FEATURE_ORDER
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_extraction() {
        let extractor = FeatureExtractor::new();
        let record = TransactionRecord {
            amount: Some(100.0),
            time_of_day: Some(14.5),
            merchant_category: Some(3.0),
            distance_from_home: Some(2.7),
            distance_from_last_transaction: Some(0.4),
            ratio_to_median_purchase: Some(1.2),
            repeat_retailer: Some(1.0),
            used_chip: Some(1.0),
            used_pin: Some(0.0),
            online_order: Some(0.0),
        };

        let features = extractor.extract(&record);

        assert_eq!(features.len(), extractor.feature_count());
        assert_eq!(features[0], 100.0); // amount
        assert_eq!(features[1], 14.5); // time_of_day
        assert_eq!(features[7], 1.0); // used_chip
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let extractor = FeatureExtractor::new();
        let record = TransactionRecord {
            amount: Some(50.0),
            ..Default::default()
        };

        let features = extractor.extract(&record);

        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features[0], 50.0);
        for &value in &features[1..] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_empty_record_is_all_zeros() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract(&TransactionRecord::default());

        assert_eq!(features, vec![0.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let extractor = FeatureExtractor::new();

        // Same record, keys supplied in two different JSON orders
        let a: TransactionRecord =
            serde_json::from_str(r#"{"amount": 9.0, "online_order": 1, "used_pin": 1}"#).unwrap();
        let b: TransactionRecord =
            serde_json::from_str(r#"{"used_pin": 1, "online_order": 1, "amount": 9.0}"#).unwrap();

        assert_eq!(extractor.extract(&a), extractor.extract(&b));
    }

    #[test]
    fn test_batch_preserves_order() {
        let extractor = FeatureExtractor::new();
        let records = vec![
            TransactionRecord {
                amount: Some(1.0),
                ..Default::default()
            },
            TransactionRecord {
                amount: Some(2.0),
                ..Default::default()
            },
        ];

        let matrix = extractor.extract_batch(&records);

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[1][0], 2.0);
    }

    #[test]
    fn test_feature_count() {
        let extractor = FeatureExtractor::new();
        assert_eq!(extractor.feature_count(), 10);
        assert_eq!(extractor.feature_names().len(), 10);
    }
}
