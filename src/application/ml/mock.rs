use super::predictor::SalesPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;

/// Deterministic stand-in for the external pipeline: predicts global sales as
/// the regional total scaled by a fixed uplift. Used as the default backend
/// when no artifact is configured, and by the integration tests.
pub struct MockPredictor {
    uplift: f64,
}

impl MockPredictor {
    pub fn new() -> Self {
        Self { uplift: 1.08 }
    }

    pub fn with_uplift(uplift: f64) -> Self {
        Self { uplift }
    }
}

impl Default for MockPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesPredictor for MockPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        Ok(vec![request.regional_sum() * self.uplift])
    }

    fn name(&self) -> &str {
        "Mock (regional heuristic)"
    }

    fn version(&self) -> &str {
        "v1"
    }
}

/// Always fails with the configured reason. Test support for the error path.
pub struct FailingPredictor {
    reason: String,
}

impl FailingPredictor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SalesPredictor for FailingPredictor {
    fn predict(&self, _request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
        Err(PredictionError::Inference {
            reason: self.reason.clone(),
        })
    }

    fn name(&self) -> &str {
        "Failing (test)"
    }

    fn version(&self) -> &str {
        "v0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_mock_is_deterministic() {
        let predictor = MockPredictor::with_uplift(2.0);
        let first = predictor.predict(&sample_request()).unwrap();
        let second = predictor.predict(&sample_request()).unwrap();
        assert_eq!(first, second);
        assert!((first[0] - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_failing_predictor_carries_reason() {
        let predictor = FailingPredictor::new("artifact corrupted");
        let err = predictor.predict(&sample_request()).unwrap_err();
        assert!(err.to_string().contains("artifact corrupted"));
    }
}
