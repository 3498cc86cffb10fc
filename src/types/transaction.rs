//! Transaction data structures for fraud detection

use serde::{Deserialize, Serialize};

/// One caller-supplied transaction to be classified.
///
/// Every field is optional: absent fields default to `0.0` at vectorization
/// time, unknown JSON keys are ignored. A non-numeric value for any field
/// fails deserialization of the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction amount
    pub amount: Option<f64>,

    /// Time of day the transaction occurred
    pub time_of_day: Option<f64>,

    /// Merchant category code (opaque numeric code)
    pub merchant_category: Option<f64>,

    /// Distance from the cardholder's home
    pub distance_from_home: Option<f64>,

    /// Distance from the previous transaction
    pub distance_from_last_transaction: Option<f64>,

    /// Ratio of this amount to the median purchase amount
    pub ratio_to_median_purchase: Option<f64>,

    /// Whether the retailer has been used before (0 or 1)
    pub repeat_retailer: Option<f64>,

    /// Whether a chip was used (0 or 1)
    pub used_chip: Option<f64>,

    /// Whether a PIN was used (0 or 1)
    pub used_pin: Option<f64>,

    /// Whether the order was placed online (0 or 1)
    pub online_order: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_deserialization() {
        let record: TransactionRecord =
            serde_json::from_str(r#"{"amount": 100.0, "used_chip": 1}"#).unwrap();

        assert_eq!(record.amount, Some(100.0));
        assert_eq!(record.used_chip, Some(1.0));
        assert_eq!(record.time_of_day, None);
        assert_eq!(record.online_order, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record: TransactionRecord =
            serde_json::from_str(r#"{"amount": 50, "card_issuer": "acme"}"#).unwrap();

        assert_eq!(record.amount, Some(50.0));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let result = serde_json::from_str::<TransactionRecord>(r#"{"amount": "lots"}"#);
        assert!(result.is_err());
    }
}
