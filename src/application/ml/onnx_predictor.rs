use super::predictor::SalesPredictor;
use crate::domain::columns;
use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;
use ort::session::Session;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info, warn};

/// Regression model exported to ONNX. Expects a single `[1, N]` f32 input in
/// the layout described by `domain::columns::FEATURE_NAMES`; whether that
/// layout actually matches the artifact is only discovered at call time.
pub struct OnnxPredictor {
    session: Option<Mutex<Session>>,
    model_path: PathBuf,
}

impl OnnxPredictor {
    pub fn new(model_path: PathBuf) -> Self {
        let mut predictor = Self {
            session: None,
            model_path,
        };
        predictor.load_model();
        predictor
    }

    fn load_model(&mut self) {
        if !self.model_path.exists() {
            warn!(
                "ONNX model not found at {:?}. Predictions will fail until it is provided.",
                self.model_path
            );
            return;
        }

        match Session::builder() {
            Ok(mut builder) => match builder.commit_from_file(&self.model_path) {
                Ok(session) => {
                    info!("Loaded ONNX model from {:?}", self.model_path);
                    self.session = Some(Mutex::new(session));
                }
                Err(e) => {
                    error!("Failed to load ONNX model: {}", e);
                }
            },
            Err(e) => {
                error!("Failed to create ONNX session builder: {}", e);
            }
        }
    }
}

impl SalesPredictor for OnnxPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        let session_mutex =
            self.session
                .as_ref()
                .ok_or_else(|| PredictionError::ModelUnavailable {
                    path: self.model_path.display().to_string(),
                })?;
        let mut session = session_mutex
            .lock()
            .map_err(|e| PredictionError::Inference {
                reason: format!("Session lock poisoned: {}", e),
            })?;

        let features = columns::request_to_vector(request);
        let shape = vec![1, features.len()];
        let input_value = ort::value::Value::from_array((shape.as_slice(), features)).map_err(
            |e| PredictionError::Inference {
                reason: format!("Input value creation failed: {}", e),
            },
        )?;

        let inputs = ort::inputs![input_value];
        let outputs = session.run(inputs).map_err(|e| PredictionError::Inference {
            reason: e.to_string(),
        })?;
        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or(PredictionError::EmptyOutput)?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictionError::Inference {
                reason: e.to_string(),
            })?;

        let predictions: Vec<f64> = data.1.iter().map(|v| *v as f64).collect();
        if predictions.is_empty() {
            return Err(PredictionError::EmptyOutput);
        }
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        "v1"
    }
}
