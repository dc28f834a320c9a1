use super::predictor::SalesPredictor;
use crate::domain::columns;
use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Random forest regressor serialized with serde_json. The feature layout
/// must match `domain::columns::FEATURE_NAMES`.
pub struct SmartCorePredictor {
    model: Option<RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    pub fn new(model_path: PathBuf) -> Self {
        let mut predictor = Self {
            model: None,
            model_path,
        };
        predictor.load_model();
        predictor
    }

    fn load_model(&mut self) {
        if !self.model_path.exists() {
            warn!(
                "Model file not found at {:?}. Predictions will fail until it is provided.",
                self.model_path
            );
            return;
        }

        match File::open(&self.model_path) {
            Ok(mut file) => {
                let mut buffer = Vec::new();
                if let Err(e) = file.read_to_end(&mut buffer) {
                    error!("Failed to read model file: {}", e);
                    return;
                }

                match serde_json::from_reader(std::io::Cursor::new(&buffer)) {
                    Ok(model) => {
                        info!("Loaded model from {:?}", self.model_path);
                        self.model = Some(model);
                    }
                    Err(e) => {
                        error!("Failed to deserialize model: {}", e);
                    }
                }
            }
            Err(e) => {
                error!("Failed to open model file: {}", e);
            }
        }
    }
}

impl SalesPredictor for SmartCorePredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| PredictionError::ModelUnavailable {
                path: self.model_path.display().to_string(),
            })?;

        let row = columns::request_to_f64_vector(request);
        let matrix =
            DenseMatrix::from_2d_vec(&vec![row]).map_err(|e| PredictionError::Inference {
                reason: format!("Matrix creation failed: {}", e),
            })?;

        let predictions = model
            .predict(&matrix)
            .map_err(|e| PredictionError::Inference {
                reason: format!("Prediction failed: {}", e),
            })?;
        if predictions.is_empty() {
            return Err(PredictionError::EmptyOutput);
        }
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
