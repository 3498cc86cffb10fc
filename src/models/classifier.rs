//! Batch fraud classifier backed by ONNX Runtime

use crate::config::AppConfig;
use crate::feature_extractor::FEATURE_COUNT;
use crate::models::loader::{LoadedModel, ModelLoader};
use anyhow::{bail, Context, Result};
use std::sync::RwLock;
use tracing::{debug, info};

/// Capability exposed by the loaded model: one batched prediction over a
/// feature matrix, returning one integer label per row.
///
/// The trait is the seam between the HTTP handlers and ONNX Runtime; tests
/// substitute a stub implementation.
pub trait Classifier: Send + Sync {
    /// Predict labels for a matrix with exactly [`FEATURE_COUNT`] columns.
    fn predict(&self, matrix: &[Vec<f32>]) -> Result<Vec<i64>>;
}

/// Fraud classifier holding the single process-wide ONNX model.
///
/// Loaded once at startup and never replaced. The session requires `&mut`
/// to run, so it sits behind an `RwLock` taken for the duration of one
/// batched invocation.
pub struct FraudClassifier {
    model: RwLock<LoadedModel>,
}

impl FraudClassifier {
    /// Load the classifier from configuration.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let loader = ModelLoader::with_threads(config.model.onnx_threads)?;
        let model = loader.load_model(&config.model.path)?;

        info!(path = %config.model.path, "Fraud classifier ready");

        Ok(Self {
            model: RwLock::new(model),
        })
    }

    /// Extract integer labels from the model outputs.
    ///
    /// Tries the named label output first (i64 tensor, sklearn-style ONNX
    /// export), then falls back to argmax over a float probability tensor.
    fn extract_labels(
        outputs: &ort::session::SessionOutputs,
        label_output: &str,
        rows: usize,
    ) -> Result<Vec<i64>> {
        if let Some(output) = outputs.get(label_output) {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                debug!(output = %label_output, rows = rows, "Extracted label tensor");
                return Self::check_row_count(data.to_vec(), rows);
            }
        }

        // Fallback: any i64 tensor, then argmax over [rows, classes] floats
        for (name, output) in outputs.iter() {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                debug!(output = %name, rows = rows, "Extracted label tensor (fallback)");
                return Self::check_row_count(data.to_vec(), rows);
            }
        }

        for (name, output) in outputs.iter() {
            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                let dims: Vec<i64> = shape.iter().copied().collect();
                if dims.len() == 2 && dims[0] as usize == rows {
                    let classes = dims[1] as usize;
                    let labels = data
                        .chunks(classes)
                        .map(|row| {
                            row.iter()
                                .enumerate()
                                .max_by(|a, b| a.1.total_cmp(b.1))
                                .map(|(i, _)| i as i64)
                                .unwrap_or(0)
                        })
                        .collect();
                    debug!(output = %name, rows = rows, "Extracted labels via argmax");
                    return Ok(labels);
                }
            }
        }

        bail!("No label output found in model results")
    }

    fn check_row_count(labels: Vec<i64>, rows: usize) -> Result<Vec<i64>> {
        if labels.len() != rows {
            bail!(
                "Model returned {} labels for {} input rows",
                labels.len(),
                rows
            );
        }
        Ok(labels)
    }
}

impl Classifier for FraudClassifier {
    fn predict(&self, matrix: &[Vec<f32>]) -> Result<Vec<i64>> {
        use ort::value::Tensor;

        if matrix.is_empty() {
            bail!("Empty feature matrix");
        }

        let rows = matrix.len();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != FEATURE_COUNT {
                bail!(
                    "Row {} has {} features, expected {}",
                    i,
                    row.len(),
                    FEATURE_COUNT
                );
            }
        }

        // One batched invocation - shape [rows, FEATURE_COUNT]
        let shape = vec![rows as i64, FEATURE_COUNT as i64];
        let flat: Vec<f32> = matrix.iter().flatten().copied().collect();
        let input_tensor =
            Tensor::from_array((shape, flat)).context("Failed to create input tensor")?;

        let mut guard = self
            .model
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        let model = &mut *guard;

        let label_output = model.label_output.clone();
        let outputs = model
            .session
            .run(ort::inputs![&model.input_name => input_tensor])?;

        Self::extract_labels(&outputs, &label_output, rows)
    }
}
