use crate::application::ml::predictor::SalesPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tracing::{error, info};

/// Request-scoped result of one successful submission, consumed by the
/// presenter and then dropped.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub request: PredictionRequest,
    /// Predicted global sales in millions of units.
    pub prediction: f64,
    /// Total of the four regional inputs. Derived for display; not validated
    /// against the prediction.
    pub regional_sum: f64,
}

/// Top-level submission handler: runs Builder output through the predictor
/// and shapes the outcome. Every failure is caught here, logged, and handed
/// back as a value; nothing terminates the process.
#[derive(Clone)]
pub struct SubmissionService {
    predictor: Arc<dyn SalesPredictor>,
}

impl SubmissionService {
    pub fn new(predictor: Arc<dyn SalesPredictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor_label(&self) -> String {
        format!("{} {}", self.predictor.name(), self.predictor.version())
    }

    /// Runs one full submission to completion. The predictor's output is
    /// treated as a sequence whose first element is the scalar prediction.
    pub fn submit(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionOutcome, PredictionError> {
        let result = self.predictor.predict(&request).and_then(|outputs| {
            outputs
                .first()
                .copied()
                .ok_or(PredictionError::EmptyOutput)
        });

        match result {
            Ok(prediction) => {
                let regional_sum = request.regional_sum();
                info!(
                    "Prediction completed: {:.2} million units (model: {} {})",
                    prediction,
                    self.predictor.name(),
                    self.predictor.version()
                );
                Ok(PredictionOutcome {
                    request,
                    prediction,
                    regional_sum,
                })
            }
            Err(e) => {
                error!("Prediction error: {}", e);
                Err(e)
            }
        }
    }

    /// Runs the submission on a worker thread so the UI thread can keep
    /// painting the working indicator. The channel carries exactly one
    /// result; the caller enforces a single submission in flight at a time.
    /// There is no timeout or cancellation: a hung model hangs its
    /// submission indefinitely.
    pub fn submit_in_background(
        &self,
        request: PredictionRequest,
    ) -> Receiver<Result<PredictionOutcome, PredictionError>> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let service = self.clone();
        std::thread::spawn(move || {
            let _ = tx.send(service.submit(request));
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::mock::{FailingPredictor, MockPredictor};
    use crate::domain::catalog::{Genre, Platform, Publisher};

    fn sample_request() -> PredictionRequest {
        PredictionRequest::builder()
            .name("New Game")
            .platform(Platform::Ps4)
            .genre(Genre::Action)
            .publisher(Publisher::Ea)
            .year(2022)
            .na_sales(1.0)
            .eu_sales(0.8)
            .jp_sales(1.2)
            .other_sales(0.5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_submit_takes_first_output_element() {
        struct MultiOutput;
        impl SalesPredictor for MultiOutput {
            fn predict(
                &self,
                _request: &PredictionRequest,
            ) -> Result<Vec<f64>, PredictionError> {
                Ok(vec![4.2, 99.0])
            }
            fn name(&self) -> &str {
                "multi"
            }
            fn version(&self) -> &str {
                "v0"
            }
        }

        let service = SubmissionService::new(Arc::new(MultiOutput));
        let outcome = service.submit(sample_request()).unwrap();
        assert_eq!(outcome.prediction, 4.2);
    }

    #[test]
    fn test_empty_output_is_an_error() {
        struct EmptyOutput;
        impl SalesPredictor for EmptyOutput {
            fn predict(
                &self,
                _request: &PredictionRequest,
            ) -> Result<Vec<f64>, PredictionError> {
                Ok(Vec::new())
            }
            fn name(&self) -> &str {
                "empty"
            }
            fn version(&self) -> &str {
                "v0"
            }
        }

        let service = SubmissionService::new(Arc::new(EmptyOutput));
        let err = service.submit(sample_request()).unwrap_err();
        assert!(matches!(err, PredictionError::EmptyOutput));
    }

    #[test]
    fn test_outcome_carries_regional_sum() {
        let service = SubmissionService::new(Arc::new(MockPredictor::new()));
        let outcome = service.submit(sample_request()).unwrap();
        assert_eq!(format!("{:.2}", outcome.regional_sum), "3.50");
        assert_eq!(outcome.request, sample_request());
    }

    #[test]
    fn test_failure_propagates_literal_reason() {
        let service =
            SubmissionService::new(Arc::new(FailingPredictor::new("schema mismatch: 8 != 15")));
        let err = service.submit(sample_request()).unwrap_err();
        assert!(err.to_string().contains("schema mismatch: 8 != 15"));
    }
}
