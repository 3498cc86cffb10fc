//! Model loading and inference

pub mod classifier;
pub mod loader;

pub use classifier::{Classifier, FraudClassifier};
pub use loader::{LoadedModel, ModelLoader};
