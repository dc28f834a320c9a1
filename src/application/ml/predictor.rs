use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;

/// Interface to the external, pre-trained sales model. Artifact loading,
/// feature encoding and preprocessing are up to each implementation; callers
/// treat the whole thing as a black box.
pub trait SalesPredictor: Send + Sync {
    /// Runs the model on one record. The return value is a sequence whose
    /// first element is the predicted global sales in millions of units.
    fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError>;

    /// Model name/type
    fn name(&self) -> &str;

    /// Model version/id
    fn version(&self) -> &str;
}
