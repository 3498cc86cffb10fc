//! Shared data types

pub mod response;
pub mod transaction;

pub use response::{HealthResponse, PredictResponse};
pub use transaction::TransactionRecord;
