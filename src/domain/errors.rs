use thiserror::Error;

/// Everything that can go wrong while building the record or invoking the
/// model. One taxonomy; every failure is terminal for its submission only,
/// and the user simply resubmits.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Model artifact not available at {path}")]
    ModelUnavailable { path: String },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },

    #[error("Predictor returned no output")]
    EmptyOutput,
}
